//! Test fixtures for end-to-end catalog assembly
//!
//! A small emoji set with one of each naming path: caps fixes, gendered
//! and generic overrides, skin tones, keycaps, flags and tag sequences.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use emojinames_catalog::{EmojiTestData, ImageDirectory};

pub const EMOJI_TEST: &str = "\
# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
1F602                                                  ; fully-qualified     # 😂 E0.6 face with tears of joy

# group: People & Body

# subgroup: hand-fingers-open
1F44B                                                  ; fully-qualified     # 👋 E0.6 waving hand
1F44B 1F3FD                                            ; fully-qualified     # 👋🏽 E1.0 waving hand: medium skin tone

# subgroup: person-sport
1F3CB FE0F                                             ; fully-qualified     # 🏋️ E0.7 person lifting weights
1F3CB 1F3FB                                            ; fully-qualified     # 🏋🏻 E2.0 person lifting weights: light skin tone
1F3CB FE0F 200D 2640 FE0F                              ; fully-qualified     # 🏋️‍♀️ E4.0 woman lifting weights

# subgroup: family
1F468 200D 2764 FE0F 200D 1F48B 200D 1F468             ; fully-qualified     # 👨‍❤️‍💋‍👨 E2.0 kiss: man, man
1F46A                                                  ; fully-qualified     # 👪 E0.6 family
1F468 200D 1F469 200D 1F467                            ; fully-qualified     # 👨‍👩‍👧 E2.0 family: man, woman, girl

# group: Component

# subgroup: skin-tone
1F3FB                                                  ; component           # 🏻 E1.0 light skin tone

# group: Symbols

# subgroup: alphanum
1F170 FE0F                                             ; fully-qualified     # 🅰️ E0.6 A button (blood type)
0023 FE0F 20E3                                         ; fully-qualified     # #️⃣ E0.6 keycap: #

# subgroup: heart
2764 FE0F                                              ; fully-qualified     # ❤️ E0.6 red heart

# group: Flags

# subgroup: country-flag
1F1F3 1F1F4                                            ; fully-qualified     # 🇳🇴 E2.0 flag: Norway
1F1E7 1F1FB                                            ; fully-qualified     # 🇧🇻 E2.0 flag: Bouvet Island
1F1FA 1F1F8                                            ; fully-qualified     # 🇺🇸 E2.0 flag: United States
1F1FA 1F1F2                                            ; fully-qualified     # 🇺🇲 E2.0 flag: U.S. Outlying Islands

# subgroup: subdivision-flag
1F3F4 E0067 E0062 E0065 E006E E0067 E007F              ; fully-qualified     # 🏴󠁧󠁢󠁥󠁮󠁧󠁿 E5.0 flag: England
";

pub const ALIASES: &str = "\
# alias;target
1f46a;1f468_200d_1f469_200d_1f467   # family -> family: man, woman, girl
1f1e7_1f1fb;1f1f3_1f1f4             # BV -> NO
1f1fa_1f1f2;1f1fa_1f1f8             # UM -> US
";

pub const EXCLUDED: &str = "\
# skin tone variants are shown by the base image
1f44b_1f3fd
";

/// Images for the fixture sequences
///
/// "person lifting weights: light skin tone" has none, Bouvet Island borrows
/// Norway's through its alias, and only regional indicator A exists in Misc.
pub const IMAGE_FILES: &[&str] = &[
    "emoji_u1f600.png",
    "emoji_u1f602.png",
    "emoji_u1f44b.png",
    "emoji_u1f44b_1f3fd.png",
    "emoji_u1f3cb.png",
    "emoji_u1f3cb_200d_2640.png",
    "emoji_u1f468_200d_2764_200d_1f48b_200d_1f468.png",
    "emoji_u1f468_200d_1f469_200d_1f467.png",
    "emoji_u1f3fb.png",
    "emoji_u1f170.png",
    "emoji_u0023_20e3.png",
    "emoji_u2764.png",
    "emoji_u1f1f3_1f1f4.png",
    "emoji_u1f1fa_1f1f8.png",
    "emoji_u1f1fa_1f1f2.png",
    "emoji_u1f3f4_e0067_e0062_e0065_e006e_e0067_e007f.png",
    "emoji_u1f1e6.png",
];

/// Fixture inputs written to a scratch directory
pub struct Inputs {
    pub metadata: EmojiTestData,
    pub images: ImageDirectory,
    pub image_dir: PathBuf,
}

/// Write the fixture files under `root` and load them
pub fn load(root: &Path) -> Inputs {
    let image_dir = root.join("pngs");
    std::fs::create_dir_all(&image_dir).unwrap();
    for file in IMAGE_FILES {
        std::fs::write(image_dir.join(file), b"").unwrap();
    }

    let emoji_test = root.join("emoji-test.txt");
    let aliases = root.join("emoji_aliases.txt");
    let excluded = root.join("excluded_aliases.txt");
    std::fs::write(&emoji_test, EMOJI_TEST).unwrap();
    std::fs::write(&aliases, ALIASES).unwrap();
    std::fs::write(&excluded, EXCLUDED).unwrap();

    let metadata = EmojiTestData::from_file(&emoji_test).unwrap();
    let images = ImageDirectory::scan(&image_dir, "png", "emoji_u", &metadata)
        .unwrap()
        .with_aliases_file(&aliases, &metadata)
        .unwrap()
        .with_excluded_file(&excluded, &metadata)
        .unwrap();

    Inputs {
        metadata,
        images,
        image_dir,
    }
}
