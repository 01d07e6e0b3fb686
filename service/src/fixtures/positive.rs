//! Positive functional cases: inputs the transliterator is expected to
//! convert correctly.

use catalogue_core::types::{LengthClass::{Medium, Short}, TestCase};

use super::case;

/// Positive functional cases `P_TC_01`..`P_TC_24`.
#[must_use]
pub fn positive_cases() -> Vec<TestCase> {
    vec![
        case(
            "P_TC_01",
            "Simple sentence test",
            Short,
            "mama gedhara yanavaa.",
            "මම ගෙදර යනවා.",
            "Basic sentence with present tense converts correctly. Spacing and word order are accurate.",
            [
                "Daily language usage",
                "Simple sentence",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_02",
            "Compound sentence test",
            Medium,
            "mama gedhara yanavaa, haebaevi vahina nisaa dhaenna yannee naee.",
            "මම ගෙදර යනවා, හැබැවි වහින නිසා දැන්න යන්නේ නෑ.",
            "Testing a longer sentence with two parts joined by a comma. The system handles the conjunction correctly.",
            [
                "Daily language usage",
                "Compound sentence",
                "M",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_03",
            "Conditional sentence test",
            Medium,
            "oya enavaanam mama balan innavaa.",
            "ඔය එනවානම් මම බලන් ඉන්නවා.",
            "Checking if the conditional form (enavaanam) is parsed as a single unit or split up. Works fine here.",
            [
                "Daily language usage",
                "Complex sentence",
                "M",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_04",
            "Interrogative sentence conversion",
            Short,
            "oyaata kohomadha?",
            "ඔයාට කොහොමද?",
            "Question form correctly converted with question mark preserved.",
            [
                "Greeting / request / response",
                "Interrogative (question)",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_05",
            "Command sentence conversion",
            Short,
            "vahaama enna.",
            "වහාම එන්න.",
            "Command form accurately converted to Sinhala imperative.",
            [
                "Daily language usage",
                "Imperative (command)",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_06",
            "Future tense test",
            Short,
            "api heta enavaa.",
            "අපි හෙට එනවා.",
            "Future tense correctly converted with proper time reference.",
            [
                "Daily language usage",
                "Future tense",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_07",
            "Negative sentence test",
            Short,
            "api heta ennee naehae",
            "අපි හෙට එන්නේ නැහැ",
            "Negative sentence correctly converted with negation marker.",
            [
                "Daily language usage",
                "Negation (negative form)",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_08",
            "Greeting conversion",
            Short,
            "aayuboovan!",
            "ආයුබෝවන්!",
            "Standard greeting accurately translated.",
            [
                "Greeting / request / response",
                "Simple sentence",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_09",
            "Polite request test",
            Medium,
            "karuNaakaralaa mata podi udhavvak karanna puLuvandha?",
            "කරුණාකරලා මට පොඩි උදව්වක් කරන්න පුළුවන්ද?",
            "Polite request form correctly handled by the translator.",
            [
                "Greeting / request / response",
                "Interrogative (question)",
                "M",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_10",
            "Informal phrasing test",
            Short,
            "eeyi, ooka dhiyan.",
            "ඒයි, ඕක දියන්.",
            "Informal colloquial terms correctly converted.",
            [
                "Slang / informal language",
                "Simple sentence",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_11",
            "Daily expression test",
            Short,
            "mata nidhimathayi.",
            "මට නිදිමතයි.",
            "Common daily expression accurately converted.",
            [
                "Daily language usage",
                "Simple sentence",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_12",
            "Multi-word text conversion",
            Medium,
            "mata oona poddak inna hariyata vaeda gihin enna kaeema kanna baya naee",
            "මට ඕන පොඩ්ඩක් ඉන්න හරියට වැඩ ගිහින් එන්න කෑම කන්න බය නෑ",
            "Multi-word collocation correctly converted.",
            [
                "Word combination / phrase pattern",
                "Complex sentence",
                "M",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_13",
            "No-space input test",
            Short,
            "mamagedharayanavaa",
            "මමගෙදරයනවා",
            "Joined words without spaces correctly interpreted.",
            [
                "Formatting (spaces / line breaks / paragraph)",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "P_TC_14",
            "Repeated words test",
            Short,
            "hari hari eka eka",
            "හරි හරි එක එක",
            "Repeated words for emphasis correctly converted.",
            [
                "Word combination / phrase pattern",
                "Simple sentence",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_15",
            "Past tense test",
            Short,
            "mama iyee gedhara giyaa.",
            "මම ඉයේ ගෙදර ගියා.",
            "Past tense correctly converted with proper verb conjugation.",
            [
                "Daily language usage",
                "Past tense",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_16",
            "Informal negation test",
            Short,
            "mata eeka karanna baee.",
            "මට ඒක කරන්න බෑ.",
            "Alternative negation form 'baee' correctly handled.",
            [
                "Daily language usage",
                "Negation (negative form)",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_17",
            "Singular pronoun test",
            Short,
            "eyaa gedhara giyaa.",
            "එයා ගෙදර ගියා.",
            "Singular third-person pronoun correctly converted.",
            [
                "Daily language usage",
                "Pronoun variation (I/you/we/they)",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_18",
            "Plural pronoun test",
            Short,
            "eyaalaa enavaa.",
            "එයාලා එනවා.",
            "Plural marker 'laa' correctly converted to Sinhala plural form.",
            [
                "Daily language usage",
                "Plural form",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_19",
            "Imperative request test",
            Short,
            "eeka dhenna.",
            "ඒක දෙන්න.",
            "Direct imperative request correctly converted.",
            [
                "Greeting / request / response",
                "Imperative (command)",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_20",
            "Mixed language technical test",
            Medium,
            "Zoom meeting ekak thiyennee. mama link eka WhatsApp karanna oone.",
            "Zoom meeting එකක් තියෙන්නේ. මම link එක WhatsApp කරන්න ඕනෙ.",
            "Testing mixed input where English technical words stay as they are.",
            [
                "Mixed Singlish + English",
                "Compound sentence",
                "M",
                "Robustness validation",
            ],
        ),
        case(
            "P_TC_21",
            "English place name test",
            Short,
            "api trip eka Kandy valata yamudha.",
            "අපි trip එක Kandy වලට යමුද.",
            "English proper noun 'Kandy' correctly preserved.",
            [
                "Names / places / common English words",
                "Interrogative (question)",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_22",
            "English abbreviation test",
            Short,
            "mata OTP eka yanna oone.",
            "මට OTP එක යන්න ඕනෙ.",
            "English abbreviation 'OTP' correctly preserved in context.",
            [
                "Mixed Singlish + English",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
        case(
            "P_TC_23",
            "Punctuation validation",
            Short,
            "oyaath enavadha? (hithana)",
            "ඔයාත් එනවද? (හිතන)",
            "Parentheses and question mark correctly preserved.",
            [
                "Punctuation / numbers",
                "Interrogative (question)",
                "S",
                "Accuracy validation",
            ],
        ),
        case(
            "P_TC_24",
            "Date and Time format test",
            Short,
            "dhesaembar 25 7.30 AM",
            "දෙසැම්බර් 25 7.30 AM",
            "Date and time formats correctly preserved.",
            [
                "Punctuation / numbers",
                "Simple sentence",
                "S",
                "Robustness validation",
            ],
        ),
    ]
}
