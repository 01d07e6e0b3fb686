//! Negative functional cases: robustness edge cases such as irregular
//! spacing, slang, extreme concatenation, punctuation spam and long input.
//!
//! `expected` is still the judged-correct Sinhala output. "Negative" describes
//! how hard the input is, not an expected error.

use catalogue_core::types::{LengthClass::{Long, Medium, Short}, TestCase};

use super::case;

/// Negative functional cases `N_TC_01`..`N_TC_10`.
#[must_use]
pub fn negative_cases() -> Vec<TestCase> {
    vec![
        case(
            "N_TC_01",
            "Short abbreviation test",
            Short,
            "Thx machan!",
            "Thx මචන්!",
            "Chat shorthand 'Thx' not recognized by system.",
            [
                "Slang / informal language",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_02",
            "Unusual slang test",
            Medium,
            "adoo vaedak baaragaththaanam eeka hariyata karapanko bn",
            "අඩෝ වැඩක් බාරගත්තානම් එක හරියට කරපන්කො බන්",
            "Very informal slang 'bn' may not convert correctly.",
            [
                "Slang / informal language",
                "Complex sentence",
                "M",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_03",
            "Extreme concatenation test",
            Short,
            "mamagedharayanavaamatapaankannaooencehetaapiyanawa",
            "මමගෙදරයනවාමටපාන්කන්නඕඑනcඑහෙටාපියනවා",
            "Extremely joined words without any spaces may cause parsing errors.",
            [
                "Formatting (spaces / line breaks / paragraph)",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_04",
            "Excessive spacing test",
            Short,
            "mama   gedhara   yanavaa.",
            "මම ගෙදර යනවා.",
            "Multiple spaces between words should ideally be collapsed.",
            [
                "Formatting (spaces / line breaks / paragraph)",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_05",
            "Mixed case abbreviation test",
            Short,
            "Mata CPU eka replace karanna onne",
            "මට CPU එක replace කරන්න ඕනෙ.",
            "Mixed case Singlish 'onne' instead of 'oone' edge case.",
            [
                "Mixed Singlish + English",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_06",
            "Punctuation spam test",
            Short,
            "ehema karanna pluwandha??? !!!",
            "එහෙම කරන්න පුළුවන්ද??? !!!",
            "Multiple punctuation marks edge case.",
            [
                "Punctuation / numbers",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_07",
            "Currency symbol test",
            Short,
            "Rs. 5343 denna",
            "Rs. 5343 දෙන්න",
            "Currency symbol followed by number edge case.",
            [
                "Punctuation / numbers",
                "Imperative (command)",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_08",
            "Long mixed content test",
            Long,
            "mema kramayen katayuthu kiriima mata sudhusudha kiyalaa karuNaakara dhaenum dhenna. mee vidhihata kaLoth kaarYAya saralava saha kaalaya ithiri karagena sampuurNa karanna puLuvan kiyalaa mata hithenavaa. ee nisaa mee kramaya Bhaavithaa kaLaata prashnayak thiyenavadha kiyalaa karuNaakara kiyanna. mama ithin dhaen karanna hadanavaa api heta sathiyee kalin yanna hadanavaa oyaata kohomadha heta yanna puluvandha kiyalaa danaganna oone.",
            "මෙම ක්‍රමයෙන් කටයුතු කිරීම මට සුදුසුද කියලා කරුණාකර දැනුම් දෙන්න. මේ විදිහට කළොත් කාර්යය සරලව සහ කාලය ඉතිරි කරගෙන සම්පූර්ණ කරන්න පුළුවන් කියලා මට හිතෙනවා. ඒ නිසා මේ ක්‍රමය භාවිතා කළාට ප්‍රශ්නයක් තියෙනවද කියලා කරුණාකර කියන්න. මම ඉතින් දැන් කරන්න හදනවා අපි හෙට සතියේ කලින් යන්න හදනවා ඔයාට කොහොමද හෙට යන්න පුළුවන්ද කියලා දැනගන්න ඕනෙ.",
            "Extremely long input stress test.",
            [
                "Formatting (spaces / line breaks / paragraph)",
                "Complex sentence",
                "L",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_09",
            "Rare colloquialism test",
            Short,
            "eka poddak amaaru wedak vagee",
            "එක පොඩ්ඩක් අමාරු වැඩක් වගේ.",
            "Regional colloquial variation edge case.",
            [
                "Slang / informal language",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "N_TC_10",
            "Tense inconsistency test",
            Medium,
            "mama iye giyaa, dhaen kanawa, heta enavaa.",
            "මම ඉයෙ ගියා, දැන් කනවා, හෙට එනවා.",
            "Rapid tense switching edge case.",
            [
                "Daily language usage",
                "Compound sentence",
                "M",
                "Robustness validation",
            ],
        ),
    ]
}
