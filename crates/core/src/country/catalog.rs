//! ISO 3166-1 reference table.

use super::Country;

/// Every officially assigned ISO 3166-1 entry, ordered by name.
pub static COUNTRIES: &[Country] = &[
    Country::new("Afghanistan", "AF", "AFG"),
    Country::new("Åland Islands", "AX", "ALA"),
    Country::new("Albania", "AL", "ALB"),
    Country::new("Algeria", "DZ", "DZA"),
    Country::new("American Samoa", "AS", "ASM"),
    Country::new("Andorra", "AD", "AND"),
    Country::new("Angola", "AO", "AGO"),
    Country::new("Anguilla", "AI", "AIA"),
    Country::new("Antarctica", "AQ", "ATA"),
    Country::new("Antigua and Barbuda", "AG", "ATG"),
    Country::new("Argentina", "AR", "ARG"),
    Country::new("Armenia", "AM", "ARM"),
    Country::new("Aruba", "AW", "ABW"),
    Country::new("Australia", "AU", "AUS"),
    Country::new("Austria", "AT", "AUT"),
    Country::new("Azerbaijan", "AZ", "AZE"),
    Country::new("Bahamas", "BS", "BHS"),
    Country::new("Bahrain", "BH", "BHR"),
    Country::new("Bangladesh", "BD", "BGD"),
    Country::new("Barbados", "BB", "BRB"),
    Country::new("Belarus", "BY", "BLR"),
    Country::new("Belgium", "BE", "BEL"),
    Country::new("Belize", "BZ", "BLZ"),
    Country::new("Benin", "BJ", "BEN"),
    Country::new("Bermuda", "BM", "BMU"),
    Country::new("Bhutan", "BT", "BTN"),
    Country::new("Bolivia, Plurinational State of", "BO", "BOL"),
    Country::new("Bonaire, Sint Eustatius and Saba", "BQ", "BES"),
    Country::new("Bosnia and Herzegovina", "BA", "BIH"),
    Country::new("Botswana", "BW", "BWA"),
    Country::new("Bouvet Island", "BV", "BVT"),
    Country::new("Brazil", "BR", "BRA"),
    Country::new("British Indian Ocean Territory", "IO", "IOT"),
    Country::new("Brunei Darussalam", "BN", "BRN"),
    Country::new("Bulgaria", "BG", "BGR"),
    Country::new("Burkina Faso", "BF", "BFA"),
    Country::new("Burundi", "BI", "BDI"),
    Country::new("Cabo Verde", "CV", "CPV"),
    Country::new("Cambodia", "KH", "KHM"),
    Country::new("Cameroon", "CM", "CMR"),
    Country::new("Canada", "CA", "CAN"),
    Country::new("Cayman Islands", "KY", "CYM"),
    Country::new("Central African Republic", "CF", "CAF"),
    Country::new("Chad", "TD", "TCD"),
    Country::new("Chile", "CL", "CHL"),
    Country::new("China", "CN", "CHN"),
    Country::new("Christmas Island", "CX", "CXR"),
    Country::new("Cocos (Keeling) Islands", "CC", "CCK"),
    Country::new("Colombia", "CO", "COL"),
    Country::new("Comoros", "KM", "COM"),
    Country::new("Congo", "CG", "COG"),
    Country::new("Congo, The Democratic Republic of the", "CD", "COD"),
    Country::new("Cook Islands", "CK", "COK"),
    Country::new("Costa Rica", "CR", "CRI"),
    Country::new("Côte d'Ivoire", "CI", "CIV"),
    Country::new("Croatia", "HR", "HRV"),
    Country::new("Cuba", "CU", "CUB"),
    Country::new("Curaçao", "CW", "CUW"),
    Country::new("Cyprus", "CY", "CYP"),
    Country::new("Czechia", "CZ", "CZE"),
    Country::new("Denmark", "DK", "DNK"),
    Country::new("Djibouti", "DJ", "DJI"),
    Country::new("Dominica", "DM", "DMA"),
    Country::new("Dominican Republic", "DO", "DOM"),
    Country::new("Ecuador", "EC", "ECU"),
    Country::new("Egypt", "EG", "EGY"),
    Country::new("El Salvador", "SV", "SLV"),
    Country::new("Equatorial Guinea", "GQ", "GNQ"),
    Country::new("Eritrea", "ER", "ERI"),
    Country::new("Estonia", "EE", "EST"),
    Country::new("Eswatini", "SZ", "SWZ"),
    Country::new("Ethiopia", "ET", "ETH"),
    Country::new("Falkland Islands (Malvinas)", "FK", "FLK"),
    Country::new("Faroe Islands", "FO", "FRO"),
    Country::new("Fiji", "FJ", "FJI"),
    Country::new("Finland", "FI", "FIN"),
    Country::new("France", "FR", "FRA"),
    Country::new("French Guiana", "GF", "GUF"),
    Country::new("French Polynesia", "PF", "PYF"),
    Country::new("French Southern Territories", "TF", "ATF"),
    Country::new("Gabon", "GA", "GAB"),
    Country::new("Gambia", "GM", "GMB"),
    Country::new("Georgia", "GE", "GEO"),
    Country::new("Germany", "DE", "DEU"),
    Country::new("Ghana", "GH", "GHA"),
    Country::new("Gibraltar", "GI", "GIB"),
    Country::new("Greece", "GR", "GRC"),
    Country::new("Greenland", "GL", "GRL"),
    Country::new("Grenada", "GD", "GRD"),
    Country::new("Guadeloupe", "GP", "GLP"),
    Country::new("Guam", "GU", "GUM"),
    Country::new("Guatemala", "GT", "GTM"),
    Country::new("Guernsey", "GG", "GGY"),
    Country::new("Guinea", "GN", "GIN"),
    Country::new("Guinea-Bissau", "GW", "GNB"),
    Country::new("Guyana", "GY", "GUY"),
    Country::new("Haiti", "HT", "HTI"),
    Country::new("Heard Island and McDonald Islands", "HM", "HMD"),
    Country::new("Holy See (Vatican City State)", "VA", "VAT"),
    Country::new("Honduras", "HN", "HND"),
    Country::new("Hong Kong", "HK", "HKG"),
    Country::new("Hungary", "HU", "HUN"),
    Country::new("Iceland", "IS", "ISL"),
    Country::new("India", "IN", "IND"),
    Country::new("Indonesia", "ID", "IDN"),
    Country::new("Iran, Islamic Republic of", "IR", "IRN"),
    Country::new("Iraq", "IQ", "IRQ"),
    Country::new("Ireland", "IE", "IRL"),
    Country::new("Isle of Man", "IM", "IMN"),
    Country::new("Israel", "IL", "ISR"),
    Country::new("Italy", "IT", "ITA"),
    Country::new("Jamaica", "JM", "JAM"),
    Country::new("Japan", "JP", "JPN"),
    Country::new("Jersey", "JE", "JEY"),
    Country::new("Jordan", "JO", "JOR"),
    Country::new("Kazakhstan", "KZ", "KAZ"),
    Country::new("Kenya", "KE", "KEN"),
    Country::new("Kiribati", "KI", "KIR"),
    Country::new("Korea, Democratic People's Republic of", "KP", "PRK"),
    Country::new("Korea, Republic of", "KR", "KOR"),
    Country::new("Kuwait", "KW", "KWT"),
    Country::new("Kyrgyzstan", "KG", "KGZ"),
    Country::new("Lao People's Democratic Republic", "LA", "LAO"),
    Country::new("Latvia", "LV", "LVA"),
    Country::new("Lebanon", "LB", "LBN"),
    Country::new("Lesotho", "LS", "LSO"),
    Country::new("Liberia", "LR", "LBR"),
    Country::new("Libya", "LY", "LBY"),
    Country::new("Liechtenstein", "LI", "LIE"),
    Country::new("Lithuania", "LT", "LTU"),
    Country::new("Luxembourg", "LU", "LUX"),
    Country::new("Macao", "MO", "MAC"),
    Country::new("Madagascar", "MG", "MDG"),
    Country::new("Malawi", "MW", "MWI"),
    Country::new("Malaysia", "MY", "MYS"),
    Country::new("Maldives", "MV", "MDV"),
    Country::new("Mali", "ML", "MLI"),
    Country::new("Malta", "MT", "MLT"),
    Country::new("Marshall Islands", "MH", "MHL"),
    Country::new("Martinique", "MQ", "MTQ"),
    Country::new("Mauritania", "MR", "MRT"),
    Country::new("Mauritius", "MU", "MUS"),
    Country::new("Mayotte", "YT", "MYT"),
    Country::new("Mexico", "MX", "MEX"),
    Country::new("Micronesia, Federated States of", "FM", "FSM"),
    Country::new("Moldova, Republic of", "MD", "MDA"),
    Country::new("Monaco", "MC", "MCO"),
    Country::new("Mongolia", "MN", "MNG"),
    Country::new("Montenegro", "ME", "MNE"),
    Country::new("Montserrat", "MS", "MSR"),
    Country::new("Morocco", "MA", "MAR"),
    Country::new("Mozambique", "MZ", "MOZ"),
    Country::new("Myanmar", "MM", "MMR"),
    Country::new("Namibia", "NA", "NAM"),
    Country::new("Nauru", "NR", "NRU"),
    Country::new("Nepal", "NP", "NPL"),
    Country::new("Netherlands", "NL", "NLD"),
    Country::new("New Caledonia", "NC", "NCL"),
    Country::new("New Zealand", "NZ", "NZL"),
    Country::new("Nicaragua", "NI", "NIC"),
    Country::new("Niger", "NE", "NER"),
    Country::new("Nigeria", "NG", "NGA"),
    Country::new("Niue", "NU", "NIU"),
    Country::new("Norfolk Island", "NF", "NFK"),
    Country::new("North Macedonia", "MK", "MKD"),
    Country::new("Northern Mariana Islands", "MP", "MNP"),
    Country::new("Norway", "NO", "NOR"),
    Country::new("Oman", "OM", "OMN"),
    Country::new("Pakistan", "PK", "PAK"),
    Country::new("Palau", "PW", "PLW"),
    Country::new("Palestine, State of", "PS", "PSE"),
    Country::new("Panama", "PA", "PAN"),
    Country::new("Papua New Guinea", "PG", "PNG"),
    Country::new("Paraguay", "PY", "PRY"),
    Country::new("Peru", "PE", "PER"),
    Country::new("Philippines", "PH", "PHL"),
    Country::new("Pitcairn", "PN", "PCN"),
    Country::new("Poland", "PL", "POL"),
    Country::new("Portugal", "PT", "PRT"),
    Country::new("Puerto Rico", "PR", "PRI"),
    Country::new("Qatar", "QA", "QAT"),
    Country::new("Réunion", "RE", "REU"),
    Country::new("Romania", "RO", "ROU"),
    Country::new("Russian Federation", "RU", "RUS"),
    Country::new("Rwanda", "RW", "RWA"),
    Country::new("Saint Barthélemy", "BL", "BLM"),
    Country::new("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN"),
    Country::new("Saint Kitts and Nevis", "KN", "KNA"),
    Country::new("Saint Lucia", "LC", "LCA"),
    Country::new("Saint Martin (French part)", "MF", "MAF"),
    Country::new("Saint Pierre and Miquelon", "PM", "SPM"),
    Country::new("Saint Vincent and the Grenadines", "VC", "VCT"),
    Country::new("Samoa", "WS", "WSM"),
    Country::new("San Marino", "SM", "SMR"),
    Country::new("Sao Tome and Principe", "ST", "STP"),
    Country::new("Saudi Arabia", "SA", "SAU"),
    Country::new("Senegal", "SN", "SEN"),
    Country::new("Serbia", "RS", "SRB"),
    Country::new("Seychelles", "SC", "SYC"),
    Country::new("Sierra Leone", "SL", "SLE"),
    Country::new("Singapore", "SG", "SGP"),
    Country::new("Sint Maarten (Dutch part)", "SX", "SXM"),
    Country::new("Slovakia", "SK", "SVK"),
    Country::new("Slovenia", "SI", "SVN"),
    Country::new("Solomon Islands", "SB", "SLB"),
    Country::new("Somalia", "SO", "SOM"),
    Country::new("South Africa", "ZA", "ZAF"),
    Country::new("South Georgia and the South Sandwich Islands", "GS", "SGS"),
    Country::new("South Sudan", "SS", "SSD"),
    Country::new("Spain", "ES", "ESP"),
    Country::new("Sri Lanka", "LK", "LKA"),
    Country::new("Sudan", "SD", "SDN"),
    Country::new("Suriname", "SR", "SUR"),
    Country::new("Svalbard and Jan Mayen", "SJ", "SJM"),
    Country::new("Sweden", "SE", "SWE"),
    Country::new("Switzerland", "CH", "CHE"),
    Country::new("Syrian Arab Republic", "SY", "SYR"),
    Country::new("Taiwan, Province of China", "TW", "TWN"),
    Country::new("Tajikistan", "TJ", "TJK"),
    Country::new("Tanzania, United Republic of", "TZ", "TZA"),
    Country::new("Thailand", "TH", "THA"),
    Country::new("Timor-Leste", "TL", "TLS"),
    Country::new("Togo", "TG", "TGO"),
    Country::new("Tokelau", "TK", "TKL"),
    Country::new("Tonga", "TO", "TON"),
    Country::new("Trinidad and Tobago", "TT", "TTO"),
    Country::new("Tunisia", "TN", "TUN"),
    Country::new("Türkiye", "TR", "TUR"),
    Country::new("Turkmenistan", "TM", "TKM"),
    Country::new("Turks and Caicos Islands", "TC", "TCA"),
    Country::new("Tuvalu", "TV", "TUV"),
    Country::new("Uganda", "UG", "UGA"),
    Country::new("Ukraine", "UA", "UKR"),
    Country::new("United Arab Emirates", "AE", "ARE"),
    Country::new("United Kingdom", "GB", "GBR"),
    Country::new("United States", "US", "USA"),
    Country::new("United States Minor Outlying Islands", "UM", "UMI"),
    Country::new("Uruguay", "UY", "URY"),
    Country::new("Uzbekistan", "UZ", "UZB"),
    Country::new("Vanuatu", "VU", "VUT"),
    Country::new("Venezuela, Bolivarian Republic of", "VE", "VEN"),
    Country::new("Viet Nam", "VN", "VNM"),
    Country::new("Virgin Islands, British", "VG", "VGB"),
    Country::new("Virgin Islands, U.S.", "VI", "VIR"),
    Country::new("Wallis and Futuna", "WF", "WLF"),
    Country::new("Western Sahara", "EH", "ESH"),
    Country::new("Yemen", "YE", "YEM"),
    Country::new("Zambia", "ZM", "ZMB"),
    Country::new("Zimbabwe", "ZW", "ZWE"),
];
