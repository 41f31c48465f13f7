use contracts::domain::a001_country::CountryInfo;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in country reference table, in fixed order
pub static COUNTRIES: &[CountryInfo] = &[
    CountryInfo::new("AF", "Afghanistan", "+93", "AFN", "Asia"),
    CountryInfo::new("AL", "Albania", "+355", "ALL", "Europe"),
    CountryInfo::new("DZ", "Algeria", "+213", "DZD", "Africa"),
    CountryInfo::new("AD", "Andorra", "+376", "EUR", "Europe"),
    CountryInfo::new("AO", "Angola", "+244", "AOA", "Africa"),
    CountryInfo::new("AR", "Argentina", "+54", "ARS", "South America"),
    CountryInfo::new("AM", "Armenia", "+374", "AMD", "Asia"),
    CountryInfo::new("AU", "Australia", "+61", "AUD", "Oceania"),
    CountryInfo::new("AT", "Austria", "+43", "EUR", "Europe"),
    CountryInfo::new("AZ", "Azerbaijan", "+994", "AZN", "Asia"),
    CountryInfo::new("BS", "Bahamas", "+1-242", "BSD", "North America"),
    CountryInfo::new("BH", "Bahrain", "+973", "BHD", "Asia"),
    CountryInfo::new("BD", "Bangladesh", "+880", "BDT", "Asia"),
    CountryInfo::new("BB", "Barbados", "+1-246", "BBD", "North America"),
    CountryInfo::new("BY", "Belarus", "+375", "BYN", "Europe"),
    CountryInfo::new("BE", "Belgium", "+32", "EUR", "Europe"),
    CountryInfo::new("BZ", "Belize", "+501", "BZD", "North America"),
    CountryInfo::new("BJ", "Benin", "+229", "XOF", "Africa"),
    CountryInfo::new("BT", "Bhutan", "+975", "BTN", "Asia"),
    CountryInfo::new("BO", "Bolivia", "+591", "BOB", "South America"),
    CountryInfo::new("BA", "Bosnia and Herzegovina", "+387", "BAM", "Europe"),
    CountryInfo::new("BW", "Botswana", "+267", "BWP", "Africa"),
    CountryInfo::new("BR", "Brazil", "+55", "BRL", "South America"),
    CountryInfo::new("BN", "Brunei", "+673", "BND", "Asia"),
    CountryInfo::new("BG", "Bulgaria", "+359", "BGN", "Europe"),
    CountryInfo::new("BF", "Burkina Faso", "+226", "XOF", "Africa"),
    CountryInfo::new("BI", "Burundi", "+257", "BIF", "Africa"),
    CountryInfo::new("KH", "Cambodia", "+855", "KHR", "Asia"),
    CountryInfo::new("CM", "Cameroon", "+237", "XAF", "Africa"),
    CountryInfo::new("CA", "Canada", "+1", "CAD", "North America"),
    CountryInfo::new("CV", "Cape Verde", "+238", "CVE", "Africa"),
    CountryInfo::new("CF", "Central African Republic", "+236", "XAF", "Africa"),
    CountryInfo::new("TD", "Chad", "+235", "XAF", "Africa"),
    CountryInfo::new("CL", "Chile", "+56", "CLP", "South America"),
    CountryInfo::new("CN", "China", "+86", "CNY", "Asia"),
    CountryInfo::new("CO", "Colombia", "+57", "COP", "South America"),
    CountryInfo::new("KM", "Comoros", "+269", "KMF", "Africa"),
    CountryInfo::new("CG", "Congo", "+242", "XAF", "Africa"),
    CountryInfo::new("CR", "Costa Rica", "+506", "CRC", "North America"),
    CountryInfo::new("HR", "Croatia", "+385", "EUR", "Europe"),
    CountryInfo::new("CU", "Cuba", "+53", "CUP", "North America"),
    CountryInfo::new("CY", "Cyprus", "+357", "EUR", "Europe"),
    CountryInfo::new("CZ", "Czech Republic", "+420", "CZK", "Europe"),
    CountryInfo::new("DK", "Denmark", "+45", "DKK", "Europe"),
    CountryInfo::new("DJ", "Djibouti", "+253", "DJF", "Africa"),
    CountryInfo::new("DM", "Dominica", "+1-767", "XCD", "North America"),
    CountryInfo::new("DO", "Dominican Republic", "+1-809", "DOP", "North America"),
    CountryInfo::new("EC", "Ecuador", "+593", "USD", "South America"),
    CountryInfo::new("EG", "Egypt", "+20", "EGP", "Africa"),
    CountryInfo::new("SV", "El Salvador", "+503", "USD", "North America"),
    CountryInfo::new("GQ", "Equatorial Guinea", "+240", "XAF", "Africa"),
    CountryInfo::new("ER", "Eritrea", "+291", "ERN", "Africa"),
    CountryInfo::new("EE", "Estonia", "+372", "EUR", "Europe"),
    CountryInfo::new("ET", "Ethiopia", "+251", "ETB", "Africa"),
    CountryInfo::new("FJ", "Fiji", "+679", "FJD", "Oceania"),
    CountryInfo::new("FI", "Finland", "+358", "EUR", "Europe"),
    CountryInfo::new("FR", "France", "+33", "EUR", "Europe"),
    CountryInfo::new("GA", "Gabon", "+241", "XAF", "Africa"),
    CountryInfo::new("GM", "Gambia", "+220", "GMD", "Africa"),
    CountryInfo::new("GE", "Georgia", "+995", "GEL", "Asia"),
    CountryInfo::new("DE", "Germany", "+49", "EUR", "Europe"),
    CountryInfo::new("GH", "Ghana", "+233", "GHS", "Africa"),
    CountryInfo::new("GR", "Greece", "+30", "EUR", "Europe"),
    CountryInfo::new("GD", "Grenada", "+1-473", "XCD", "North America"),
    CountryInfo::new("GT", "Guatemala", "+502", "GTQ", "North America"),
    CountryInfo::new("GN", "Guinea", "+224", "GNF", "Africa"),
    CountryInfo::new("GW", "Guinea-Bissau", "+245", "XOF", "Africa"),
    CountryInfo::new("GY", "Guyana", "+592", "GYD", "South America"),
    CountryInfo::new("HT", "Haiti", "+509", "HTG", "North America"),
    CountryInfo::new("HN", "Honduras", "+504", "HNL", "North America"),
    CountryInfo::new("HU", "Hungary", "+36", "HUF", "Europe"),
    CountryInfo::new("IS", "Iceland", "+354", "ISK", "Europe"),
    CountryInfo::new("IN", "India", "+91", "INR", "Asia"),
    CountryInfo::new("ID", "Indonesia", "+62", "IDR", "Asia"),
    CountryInfo::new("IR", "Iran", "+98", "IRR", "Asia"),
    CountryInfo::new("IQ", "Iraq", "+964", "IQD", "Asia"),
    CountryInfo::new("IE", "Ireland", "+353", "EUR", "Europe"),
    CountryInfo::new("IL", "Israel", "+972", "ILS", "Asia"),
    CountryInfo::new("IT", "Italy", "+39", "EUR", "Europe"),
    CountryInfo::new("JM", "Jamaica", "+1-876", "JMD", "North America"),
    CountryInfo::new("JP", "Japan", "+81", "JPY", "Asia"),
    CountryInfo::new("JO", "Jordan", "+962", "JOD", "Asia"),
    CountryInfo::new("KZ", "Kazakhstan", "+7", "KZT", "Asia"),
    CountryInfo::new("KE", "Kenya", "+254", "KES", "Africa"),
    CountryInfo::new("KI", "Kiribati", "+686", "AUD", "Oceania"),
    CountryInfo::new("KW", "Kuwait", "+965", "KWD", "Asia"),
    CountryInfo::new("KG", "Kyrgyzstan", "+996", "KGS", "Asia"),
    CountryInfo::new("LA", "Laos", "+856", "LAK", "Asia"),
    CountryInfo::new("LV", "Latvia", "+371", "EUR", "Europe"),
    CountryInfo::new("LB", "Lebanon", "+961", "LBP", "Asia"),
    CountryInfo::new("LS", "Lesotho", "+266", "LSL", "Africa"),
    CountryInfo::new("LR", "Liberia", "+231", "LRD", "Africa"),
    CountryInfo::new("LY", "Libya", "+218", "LYD", "Africa"),
    CountryInfo::new("LI", "Liechtenstein", "+423", "CHF", "Europe"),
    CountryInfo::new("LT", "Lithuania", "+370", "EUR", "Europe"),
    CountryInfo::new("LU", "Luxembourg", "+352", "EUR", "Europe"),
    CountryInfo::new("MK", "Macedonia", "+389", "MKD", "Europe"),
    CountryInfo::new("MG", "Madagascar", "+261", "MGA", "Africa"),
    CountryInfo::new("MW", "Malawi", "+265", "MWK", "Africa"),
    CountryInfo::new("MY", "Malaysia", "+60", "MYR", "Asia"),
    CountryInfo::new("MV", "Maldives", "+960", "MVR", "Asia"),
    CountryInfo::new("ML", "Mali", "+223", "XOF", "Africa"),
    CountryInfo::new("MT", "Malta", "+356", "EUR", "Europe"),
    CountryInfo::new("MH", "Marshall Islands", "+692", "USD", "Oceania"),
    CountryInfo::new("MR", "Mauritania", "+222", "MRU", "Africa"),
    CountryInfo::new("MU", "Mauritius", "+230", "MUR", "Africa"),
    CountryInfo::new("MX", "Mexico", "+52", "MXN", "North America"),
    CountryInfo::new("FM", "Micronesia", "+691", "USD", "Oceania"),
    CountryInfo::new("MD", "Moldova", "+373", "MDL", "Europe"),
    CountryInfo::new("MC", "Monaco", "+377", "EUR", "Europe"),
    CountryInfo::new("MN", "Mongolia", "+976", "MNT", "Asia"),
    CountryInfo::new("ME", "Montenegro", "+382", "EUR", "Europe"),
    CountryInfo::new("MA", "Morocco", "+212", "MAD", "Africa"),
    CountryInfo::new("MZ", "Mozambique", "+258", "MZN", "Africa"),
    CountryInfo::new("MM", "Myanmar", "+95", "MMK", "Asia"),
    CountryInfo::new("NA", "Namibia", "+264", "NAD", "Africa"),
    CountryInfo::new("NR", "Nauru", "+674", "AUD", "Oceania"),
    CountryInfo::new("NP", "Nepal", "+977", "NPR", "Asia"),
    CountryInfo::new("NL", "Netherlands", "+31", "EUR", "Europe"),
    CountryInfo::new("NZ", "New Zealand", "+64", "NZD", "Oceania"),
    CountryInfo::new("NI", "Nicaragua", "+505", "NIO", "North America"),
    CountryInfo::new("NE", "Niger", "+227", "XOF", "Africa"),
    CountryInfo::new("NG", "Nigeria", "+234", "NGN", "Africa"),
    CountryInfo::new("KP", "North Korea", "+850", "KPW", "Asia"),
    CountryInfo::new("NO", "Norway", "+47", "NOK", "Europe"),
    CountryInfo::new("OM", "Oman", "+968", "OMR", "Asia"),
    CountryInfo::new("PK", "Pakistan", "+92", "PKR", "Asia"),
    CountryInfo::new("PW", "Palau", "+680", "USD", "Oceania"),
    CountryInfo::new("PA", "Panama", "+507", "PAB", "North America"),
    CountryInfo::new("PG", "Papua New Guinea", "+675", "PGK", "Oceania"),
    CountryInfo::new("PY", "Paraguay", "+595", "PYG", "South America"),
    CountryInfo::new("PE", "Peru", "+51", "PEN", "South America"),
    CountryInfo::new("PH", "Philippines", "+63", "PHP", "Asia"),
    CountryInfo::new("PL", "Poland", "+48", "PLN", "Europe"),
    CountryInfo::new("PT", "Portugal", "+351", "EUR", "Europe"),
    CountryInfo::new("QA", "Qatar", "+974", "QAR", "Asia"),
    CountryInfo::new("RO", "Romania", "+40", "RON", "Europe"),
    CountryInfo::new("RU", "Russia", "+7", "RUB", "Europe"),
    CountryInfo::new("RW", "Rwanda", "+250", "RWF", "Africa"),
    CountryInfo::new("KN", "Saint Kitts and Nevis", "+1-869", "XCD", "North America"),
    CountryInfo::new("LC", "Saint Lucia", "+1-758", "XCD", "North America"),
    CountryInfo::new("VC", "Saint Vincent", "+1-784", "XCD", "North America"),
    CountryInfo::new("WS", "Samoa", "+685", "WST", "Oceania"),
    CountryInfo::new("SM", "San Marino", "+378", "EUR", "Europe"),
    CountryInfo::new("ST", "Sao Tome and Principe", "+239", "STN", "Africa"),
    CountryInfo::new("SA", "Saudi Arabia", "+966", "SAR", "Asia"),
    CountryInfo::new("SN", "Senegal", "+221", "XOF", "Africa"),
    CountryInfo::new("RS", "Serbia", "+381", "RSD", "Europe"),
    CountryInfo::new("SC", "Seychelles", "+248", "SCR", "Africa"),
    CountryInfo::new("SL", "Sierra Leone", "+232", "SLL", "Africa"),
    CountryInfo::new("SG", "Singapore", "+65", "SGD", "Asia"),
    CountryInfo::new("SK", "Slovakia", "+421", "EUR", "Europe"),
    CountryInfo::new("SI", "Slovenia", "+386", "EUR", "Europe"),
    CountryInfo::new("SB", "Solomon Islands", "+677", "SBD", "Oceania"),
    CountryInfo::new("SO", "Somalia", "+252", "SOS", "Africa"),
    CountryInfo::new("ZA", "South Africa", "+27", "ZAR", "Africa"),
    CountryInfo::new("KR", "South Korea", "+82", "KRW", "Asia"),
    CountryInfo::new("SS", "South Sudan", "+211", "SSP", "Africa"),
    CountryInfo::new("ES", "Spain", "+34", "EUR", "Europe"),
    CountryInfo::new("LK", "Sri Lanka", "+94", "LKR", "Asia"),
    CountryInfo::new("SD", "Sudan", "+249", "SDG", "Africa"),
    CountryInfo::new("SR", "Suriname", "+597", "SRD", "South America"),
    CountryInfo::new("SZ", "Swaziland", "+268", "SZL", "Africa"),
    CountryInfo::new("SE", "Sweden", "+46", "SEK", "Europe"),
    CountryInfo::new("CH", "Switzerland", "+41", "CHF", "Europe"),
    CountryInfo::new("SY", "Syria", "+963", "SYP", "Asia"),
    CountryInfo::new("TW", "Taiwan", "+886", "TWD", "Asia"),
    CountryInfo::new("TJ", "Tajikistan", "+992", "TJS", "Asia"),
    CountryInfo::new("TZ", "Tanzania", "+255", "TZS", "Africa"),
    CountryInfo::new("TH", "Thailand", "+66", "THB", "Asia"),
    CountryInfo::new("TL", "Timor-Leste", "+670", "USD", "Asia"),
    CountryInfo::new("TG", "Togo", "+228", "XOF", "Africa"),
    CountryInfo::new("TO", "Tonga", "+676", "TOP", "Oceania"),
    CountryInfo::new("TT", "Trinidad and Tobago", "+1-868", "TTD", "North America"),
    CountryInfo::new("TN", "Tunisia", "+216", "TND", "Africa"),
    CountryInfo::new("TR", "Turkey", "+90", "TRY", "Asia"),
    CountryInfo::new("TM", "Turkmenistan", "+993", "TMT", "Asia"),
    CountryInfo::new("TV", "Tuvalu", "+688", "AUD", "Oceania"),
    CountryInfo::new("UG", "Uganda", "+256", "UGX", "Africa"),
    CountryInfo::new("UA", "Ukraine", "+380", "UAH", "Europe"),
    CountryInfo::new("AE", "United Arab Emirates", "+971", "AED", "Asia"),
    CountryInfo::new("GB", "United Kingdom", "+44", "GBP", "Europe"),
    CountryInfo::new("US", "United States", "+1", "USD", "North America"),
    CountryInfo::new("UY", "Uruguay", "+598", "UYU", "South America"),
    CountryInfo::new("UZ", "Uzbekistan", "+998", "UZS", "Asia"),
    CountryInfo::new("VU", "Vanuatu", "+678", "VUV", "Oceania"),
    CountryInfo::new("VA", "Vatican City", "+379", "EUR", "Europe"),
    CountryInfo::new("VE", "Venezuela", "+58", "VES", "South America"),
    CountryInfo::new("VN", "Vietnam", "+84", "VND", "Asia"),
    CountryInfo::new("YE", "Yemen", "+967", "YER", "Asia"),
    CountryInfo::new("ZM", "Zambia", "+260", "ZMW", "Africa"),
    CountryInfo::new("ZW", "Zimbabwe", "+263", "ZWL", "Africa"),
];

static COUNTRY_INDEX: Lazy<HashMap<&'static str, &'static CountryInfo>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.code, c)).collect());

/// Look up a country by its two-letter code
pub fn country_by_code(code: &str) -> Option<&'static CountryInfo> {
    COUNTRY_INDEX.get(code).copied()
}

/// Distinct region names, in order of first appearance in the table
pub fn regions() -> Vec<&'static str> {
    let mut result: Vec<&'static str> = Vec::new();
    for country in COUNTRIES {
        if !result.contains(&country.region) {
            result.push(country.region);
        }
    }
    result
}
