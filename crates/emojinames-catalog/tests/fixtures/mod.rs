//! Test fixtures for provider integration tests
//!
//! A trimmed emoji-test.txt covering the shapes the providers must handle:
//! plain single characters, skin tone variants, ZWJ sequences with and
//! without variation selectors, keycaps, flags and tag sequences.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const EMOJI_TEST: &str = "\
# emoji-test.txt
# This file provides data for testing which emoji forms should be in keyboards.
# Version: 15.0

# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face

# subgroup: heart
2764 FE0F                                              ; fully-qualified     # ❤️ E0.6 red heart
2764                                                   ; unqualified         # ❤ E0.6 red heart

# group: People & Body

# subgroup: person-sport
1F3CB FE0F                                             ; fully-qualified     # 🏋️ E0.7 person lifting weights
1F3CB                                                  ; unqualified         # 🏋 E0.7 person lifting weights
1F3CB 1F3FB                                            ; fully-qualified     # 🏋🏻 E2.0 person lifting weights: light skin tone
1F3CB FE0F 200D 2642 FE0F                              ; fully-qualified     # 🏋️‍♂️ E4.0 man lifting weights
1F3CB 200D 2642 FE0F                                   ; unqualified         # 🏋‍♂️ E4.0 man lifting weights

# subgroup: family
1F468 200D 2764 FE0F 200D 1F48B 200D 1F468             ; fully-qualified     # 👨‍❤️‍💋‍👨 E2.0 kiss: man, man

# group: Symbols

# subgroup: keycap
0023 FE0F 20E3                                         ; fully-qualified     # #️⃣ E0.6 keycap: #

# subgroup: alphanum
1F170 FE0F                                             ; fully-qualified     # 🅰️ E0.6 A button (blood type)

# group: Flags

# subgroup: country-flag
1F1F3 1F1F4                                            ; fully-qualified     # 🇳🇴 E2.0 flag: Norway

# subgroup: subdivision-flag
1F3F4 E0067 E0062 E0065 E006E E0067 E007F              ; fully-qualified     # 🏴󠁧󠁢󠁥󠁮󠁧󠁿 E5.0 flag: England

# group: Component

# subgroup: skin-tone
1F3FB                                                  ; component           # 🏻 E1.0 light skin tone
";

pub const ALIASES: &str = "\
# Format: alias;canonical  # comment
1f1e7_1f1fb;1f1f3_1f1f4    # BV -> NO
1f1f8_1f1ef;1f1f3_1f1f4    # SJ -> NO
1f3cb_200d_2642;1f3cb      # man lifting weights -> person lifting weights
";

pub const UNICODE_DATA: &str = "\
0023;NUMBER SIGN;Po;0;ET;;;;;N;;;;;
2764;HEAVY BLACK HEART;So;0;ON;;;;;N;;;;;
1F3CB;WEIGHT LIFTER;So;0;ON;;;;;N;;;;;
1F3FB;EMOJI MODIFIER FITZPATRICK TYPE-1-2;Sk;0;ON;;;;;N;;;;;
1F600;GRINNING FACE;So;0;ON;;;;;N;;;;;
";

/// Image files matching the fixture data (no variation selectors in names)
pub const IMAGE_FILES: &[&str] = &[
    "emoji_u1f600.png",
    "emoji_u2764.png",
    "emoji_u1f3cb.png",
    "emoji_u1f3cb_1f3fb.png",
    "emoji_u1f3cb_200d_2642.png",
    "emoji_u0023_20e3.png",
    "emoji_u1f1f3_1f1f4.png",
    "emoji_u1f1e7_1f1fb.png",
    "emoji_u1f170.png",
    "thumbs.db",
];

/// Write `contents` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Create an image directory populated with empty files
pub fn image_dir(root: &Path, files: &[&str]) -> PathBuf {
    let dir = root.join("pngs");
    std::fs::create_dir_all(&dir).unwrap();
    for file in files {
        std::fs::write(dir.join(file), b"").unwrap();
    }
    dir
}
