//! Literal code points of the primitive catalog entries.
//!
//! Combining marks are written as escapes so the literals survive editors
//! that normalise text.

/// Printable ASCII minus quotes, slashes and square, curly and angle brackets.
pub(crate) const ASCII: &str = " !#$%&()*+,-.0123456789:;=?@ABCDEFGHIJKLMNOPQRSTUVWXYZ^_abcdefghijklmnopqrstuvwxyz|~";

/// Polish alphabet, both cases.
pub(crate) const POLISH: &str = "ĄąĆćĘęŁłŃńÓóŚśŹźŻżabcdefghijklmnoprstuwvxyzABCDEFGHIJKLMNOPRSTUWVXYZ";

/// English letters, both cases.
pub(crate) const ENGLISH: &str = "abcdefghijklmnoprstuwvxyzABCDEFGHIJKLMNOPRSTUWVXYZ";

/// Russian alphabet, both cases.
pub(crate) const RUSSIAN: &str = "АаБбВвГгДдЕеЁёЖжЗзИиЙйКкЛлМмНнОоПпРрСсТтУуФфХхЦцЧчШшЩщЪъЫыЬьЭэЮюЯя";

/// Assorted mathematical operators and brackets.
pub(crate) const MATHEMATICAL_SYMBOLS: &str = "∛ℤℝ⋃⋂⋡⪺≠⊐∵∧⦝⊕∯∑∏⊶⫝\u{0338}⦕⟪⦅」⟅⦋";

/// Letters and digits from the Mathematical Alphanumeric Symbols block.
pub(crate) const MATHEMATICAL_FONTS: &str = "𝔄𝔞𝕭𝖇𝔻𝕕𝟛𝐅𝐟𝐿𝑙𝑴𝒎𝒩𝓃𝓞𝓸𝖶𝗐𝗫𝘅𝟭𝘠𝘺𝚉𝚣";

/// A handful of emoji. Contains a regional indicator pair, so one flag is two code points.
pub(crate) const EMOJI: &str = "🤡🤖🧟🏋🥇☟🚲🚠🐞🐜💄🐲🌓🌪🇵🇱💵";

/// Currency signs.
pub(crate) const CURRENCIES: &str = "₿£$¢₰₱₣₳฿₲₭₥₦₱₽₴₮₩";

/// Gender symbols.
pub(crate) const SEX: &str = "⚥⚩⚮⚭⚣⚢⚤⚯";

/// Symbols printed on keyboard keys.
pub(crate) const KEYBOARD: &str = "⌘⎈✄↵✧✲⎇✦✧";

/// Greek letters, including mathematical bold variants outside the BMP.
pub(crate) const GREEK: &str = "αβδεθλμπφψΩ𝞕𝞖𝞗𝞘𝝽𝝾𝝿𝞀𝞂";

/// Upside-down Latin letters.
pub(crate) const INVERTED_LETTERS: &str = "Z⅄XʍɅ∩ꞱSᴚÒԀONƜꞀꞰſIH⅁ℲƎDƆBⱯzʎxʍʌnʇsɹbdouɯꞁʞfᴉɥᵷɟǝpɔqɐ";

/// International Phonetic Alphabet symbols. Carries a combining double breve.
pub(crate) const IPA: &str = "āäēĕæɛiːɝo\u{035e}o";

/// Full-width forms, as used next to CJK text.
pub(crate) const FULL_WIDTH_CHARACTERS: &str = "０ＣＤ￦￤ｒｐａｒｔｉｃｕｌａｒ";

/// CJK compatibility unit squares.
pub(crate) const UNITS: &str = "㎛㎠㎢㎖㎲㎏㎆㎑㎷㏀㎃㎨㎮㎪㎉㏑㍱㏖";

/// Braille patterns.
pub(crate) const BRAILLE: &str = "⠞⠽⠏⠑⠓⠑⠗⠑";

/// Latin letters outside the basic alphabet.
pub(crate) const LATIN: &str = "ᴁèóƃᶐɷȷᴂɒᴝᴥ";

/// Cyrillic letters outside the Russian alphabet.
pub(crate) const CYRILLIC_SUPPLEMENT: &str = "ԆҤ҂ԔԙӜԨԬӦӴѠѼ";

/// Common Chinese characters.
pub(crate) const CHINESE: &str = "的一是在不了有和人这中大为上个国相见欢·林花谢了春红";

/// Hiragana, katakana and half-width katakana.
pub(crate) const JAPANESE: &str = "あいうえアイウエオ・ヽヾヿｱｲｳｴｵｶｷｸ";

/// Hangul jamo.
pub(crate) const KOREAN: &str = "ᅒᅓᅔᅕᅖᅗᅘᆪᆫᆬᆭᆮᆯᆰ";

/// Arabic letters, digits and ligatures.
pub(crate) const ARABIC: &str = "ﷺ﷽ﵴﴙﲀ\u{06dd}ﲂ۞؊٩١۲ݶمڮجݗݨݳھڝ";

/// Ethiopic syllables and punctuation.
pub(crate) const ETHIOPIAN: &str = "ቷቸቹጟጠኸኹⶹꬨꬩꬖꬠ᎐᎑᎒፣፤፥፪፫፬የኢትዮጵያ፡መ";

/// Devanagari letters and digits.
pub(crate) const DEVANAGARI: &str = "ऒओॺॻ॥॰षस१२३ळऴ";

/// Bengali letters, digits and signs.
pub(crate) const BENGALI: &str = "ঊঋজঝঞলশ৪৫৵৶\u{0981}ংৗ\u{09e2}";

/// Tamil letters, digits and signs.
pub(crate) const TAMIL: &str = "ஃஅஆஇணதந௫௬௭ௐ௳௴ோ ௌ";

/// Tibetan letters, marks and symbols.
pub(crate) const TIBETAN: &str = "ག\u{0fb7}ངཅ༳༪༫༐༑༒࿄࿅࿇࿈༚༛༜࿐࿑࿒ \u{0f71} \u{0f72} \u{0f71}\u{0f72}༻༼ ༽\u{0fa8} \u{0fa9}";

/// Phoenician letters.
pub(crate) const PHOENICIAN: &str = "𐤟𐤛𐤗𐤘𐤒𐤓𐤔𐤕";

/// Runic letters.
pub(crate) const RUNES: &str = "ᚠᚡᚢᛋᛌᛍ";
