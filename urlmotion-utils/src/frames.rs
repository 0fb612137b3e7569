// URL Motion: Frame Library
// Pure generators for the frame sequences played through the URL fragment.
//
// Every generator returns a fresh `Vec<String>`; nothing here keeps state, so
// calling a generator twice with the same arguments yields equal sequences.

/// A single display string written into the URL fragment
pub type Frame = String;

/// Ordered list of frames, played front to back and looped
pub type Frames = Vec<Frame>;

/// Message used by [`three_dots_default`]
pub const DEFAULT_MESSAGE: &str = "Loading";

/// Defaults used by [`loading_bar_default`]
pub const DEFAULT_BAR_SYMBOL: &str = "=";
pub const DEFAULT_BAR_LENGTH: usize = 10;
pub const DEFAULT_BAR_END: &str = "~";

const ARROWS: [&str; 8] = ["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"];

const VERTICAL_BARS: [&str; 14] = [
    "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃", "▁",
];

const HORIZONTAL_BARS: [&str; 13] = [
    "▏", "▎", "▍", "▌", "▋", "▊", "▉", "▊", "▋", "▌", "▍", "▎", "▏",
];

/// First code point of the Unicode braille block
const BRAILLE_BASE: u32 = 0x2800;

/// Braille dot bit for each bit of the frame counter, filling the left
/// column top to bottom (dots 1, 2, 3, 7) before the right (4, 5, 6, 8)
const BRAILLE_DOT_ORDER: [u32; 8] = [0x01, 0x02, 0x04, 0x40, 0x08, 0x10, 0x20, 0x80];

const BOUNCING_BALL: [&str; 10] = [
    "( ●    )",
    "(  ●   )",
    "(   ●  )",
    "(    ● )",
    "(     ●)",
    "(    ● )",
    "(   ●  )",
    "(  ●   )",
    "( ●    )",
    "(●     )",
];

const SMILEY: [&str; 2] = ["😄 ", "😝 "];

const MONKEYS: [&str; 4] = ["🙈 ", "🙈 ", "🙉 ", "🙊 "];

const HEARTS: [&str; 5] = ["💛 ", "💙 ", "💜 ", "💚 ", "❤️ "];

const MATERIAL: &[&str] = &[
    "█▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "██▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "███▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "████▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "██████▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "██████▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "███████▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "████████▁▁▁▁▁▁▁▁▁▁▁▁",
    "█████████▁▁▁▁▁▁▁▁▁▁▁",
    "█████████▁▁▁▁▁▁▁▁▁▁▁",
    "██████████▁▁▁▁▁▁▁▁▁▁",
    "███████████▁▁▁▁▁▁▁▁▁",
    "█████████████▁▁▁▁▁▁▁",
    "██████████████▁▁▁▁▁▁",
    "██████████████▁▁▁▁▁▁",
    "▁██████████████▁▁▁▁▁",
    "▁██████████████▁▁▁▁▁",
    "▁██████████████▁▁▁▁▁",
    "▁▁██████████████▁▁▁▁",
    "▁▁▁██████████████▁▁▁",
    "▁▁▁▁█████████████▁▁▁",
    "▁▁▁▁██████████████▁▁",
    "▁▁▁▁██████████████▁▁",
    "▁▁▁▁▁██████████████▁",
    "▁▁▁▁▁██████████████▁",
    "▁▁▁▁▁██████████████▁",
    "▁▁▁▁▁▁██████████████",
    "▁▁▁▁▁▁██████████████",
    "▁▁▁▁▁▁▁█████████████",
    "▁▁▁▁▁▁▁█████████████",
    "▁▁▁▁▁▁▁▁████████████",
    "▁▁▁▁▁▁▁▁████████████",
    "▁▁▁▁▁▁▁▁▁███████████",
    "▁▁▁▁▁▁▁▁▁███████████",
    "▁▁▁▁▁▁▁▁▁▁██████████",
    "▁▁▁▁▁▁▁▁▁▁██████████",
    "▁▁▁▁▁▁▁▁▁▁▁▁████████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁███████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁██████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█████",
    "█▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████",
    "██▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁███",
    "██▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁███",
    "███▁▁▁▁▁▁▁▁▁▁▁▁▁▁███",
    "████▁▁▁▁▁▁▁▁▁▁▁▁▁▁██",
    "█████▁▁▁▁▁▁▁▁▁▁▁▁▁▁█",
    "█████▁▁▁▁▁▁▁▁▁▁▁▁▁▁█",
    "██████▁▁▁▁▁▁▁▁▁▁▁▁▁█",
    "████████▁▁▁▁▁▁▁▁▁▁▁▁",
    "█████████▁▁▁▁▁▁▁▁▁▁▁",
    "█████████▁▁▁▁▁▁▁▁▁▁▁",
    "█████████▁▁▁▁▁▁▁▁▁▁▁",
    "█████████▁▁▁▁▁▁▁▁▁▁▁",
    "███████████▁▁▁▁▁▁▁▁▁",
    "████████████▁▁▁▁▁▁▁▁",
    "████████████▁▁▁▁▁▁▁▁",
    "██████████████▁▁▁▁▁▁",
    "██████████████▁▁▁▁▁▁",
    "▁██████████████▁▁▁▁▁",
    "▁██████████████▁▁▁▁▁",
    "▁▁▁█████████████▁▁▁▁",
    "▁▁▁▁▁████████████▁▁▁",
    "▁▁▁▁▁████████████▁▁▁",
    "▁▁▁▁▁▁███████████▁▁▁",
    "▁▁▁▁▁▁▁▁█████████▁▁▁",
    "▁▁▁▁▁▁▁▁█████████▁▁▁",
    "▁▁▁▁▁▁▁▁▁█████████▁▁",
    "▁▁▁▁▁▁▁▁▁█████████▁▁",
    "▁▁▁▁▁▁▁▁▁▁█████████▁",
    "▁▁▁▁▁▁▁▁▁▁▁████████▁",
    "▁▁▁▁▁▁▁▁▁▁▁████████▁",
    "▁▁▁▁▁▁▁▁▁▁▁▁███████▁",
    "▁▁▁▁▁▁▁▁▁▁▁▁███████▁",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁███████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁███████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁███",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁███",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁██",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁██",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁██",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
    "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁",
];

const SOCCER: [&str; 12] = [
    " 🧑⚽️       🧑 ",
    "🧑  ⚽️      🧑 ",
    "🧑   ⚽️     🧑 ",
    "🧑    ⚽️    🧑 ",
    "🧑     ⚽️   🧑 ",
    "🧑      ⚽️  🧑 ",
    "🧑       ⚽️🧑  ",
    "🧑      ⚽️  🧑 ",
    "🧑     ⚽️   🧑 ",
    "🧑    ⚽️    🧑 ",
    "🧑   ⚽️     🧑 ",
    "🧑  ⚽️      🧑 ",
];

const AESTHETIC: [&str; 8] = [
    "▰▱▱▱▱▱▱",
    "▰▰▱▱▱▱▱",
    "▰▰▰▱▱▱▱",
    "▰▰▰▰▱▱▱",
    "▰▰▰▰▰▱▱",
    "▰▰▰▰▰▰▱",
    "▰▰▰▰▰▰▰",
    "▰▱▱▱▱▱▱",
];

fn to_frames(table: &[&str]) -> Frames {
    table.iter().map(|frame| frame.to_string()).collect()
}

/// `Loading.`, `Loading..`, `Loading...` with a custom message
pub fn three_dots(message: &str) -> Frames {
    vec![
        format!("{}.", message),
        format!("{}..", message),
        format!("{}...", message),
    ]
}

/// [`three_dots`] with [`DEFAULT_MESSAGE`]
pub fn three_dots_default() -> Frames {
    three_dots(DEFAULT_MESSAGE)
}

/// The eight compass arrows, rotating clockwise from west
pub fn arrow_spinner() -> Frames {
    to_frames(&ARROWS)
}

/// Block heights ramping up to a full block and back down
pub fn vertical_bars() -> Frames {
    to_frames(&VERTICAL_BARS)
}

/// Bar widths growing to a full block and shrinking back (palindrome)
pub fn streaching_vertical_bars() -> Frames {
    to_frames(&HORIZONTAL_BARS)
}

/// All 256 braille patterns, counting up through the dots column by column.
///
/// Frame `n` lights the dots whose counter bits are set in `n`, so the
/// sequence reads `⠀⠁⠂⠃⠄⠅⠆⠇⡀⡁…` rather than following code point order.
pub fn spining_dots() -> Frames {
    (0..=0xFFu32)
        .map(|counter| {
            BRAILLE_DOT_ORDER
                .iter()
                .enumerate()
                .filter(|(bit, _)| counter & (1 << bit) != 0)
                .fold(BRAILLE_BASE, |glyph, (_, dot)| glyph | dot)
        })
        .filter_map(char::from_u32)
        .map(String::from)
        .collect()
}

/// Progress bar that fills one `symbol` per frame.
///
/// Frame `i` is `[` + `symbol` repeated `i` times + `end_character` repeated
/// `length - i` times + `]`. Both strings are repeated whole, so multi-char
/// symbols produce proportionally wider frames. A `length` of zero yields an
/// empty sequence.
pub fn loading_bar(symbol: &str, length: usize, end_character: &str) -> Frames {
    (0..length)
        .map(|filled| {
            format!(
                "[{}{}]",
                symbol.repeat(filled),
                end_character.repeat(length - filled)
            )
        })
        .collect()
}

/// [`loading_bar`] with `=`, 10 frames and `~`
pub fn loading_bar_default() -> Frames {
    loading_bar(DEFAULT_BAR_SYMBOL, DEFAULT_BAR_LENGTH, DEFAULT_BAR_END)
}

pub fn bouncing_balls() -> Frames {
    to_frames(&BOUNCING_BALL)
}

pub fn smiley() -> Frames {
    to_frames(&SMILEY)
}

pub fn monkeys() -> Frames {
    to_frames(&MONKEYS)
}

pub fn hearts() -> Frames {
    to_frames(&HEARTS)
}

/// Material-style indeterminate progress sweep (20 cells wide)
pub fn material() -> Frames {
    to_frames(MATERIAL)
}

pub fn soccer() -> Frames {
    to_frames(&SOCCER)
}

/// Seven-cell block fill ramp
pub fn aesthetic() -> Frames {
    to_frames(&AESTHETIC)
}

/// Returns a new sequence with `prfx` in front of every frame
pub fn prefix(prfx: &str, frames: &[Frame]) -> Frames {
    frames.iter().map(|frame| format!("{}{}", prfx, frame)).collect()
}

/// Returns a new sequence with `sufx` after every frame
pub fn suffix(sufx: &str, frames: &[Frame]) -> Frames {
    frames.iter().map(|frame| format!("{}{}", frame, sufx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(frames: &[&str]) -> Frames {
        frames.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_three_dots() {
        assert_eq!(three_dots("Wait"), owned(&["Wait.", "Wait..", "Wait..."]));
        assert_eq!(
            three_dots_default(),
            owned(&["Loading.", "Loading..", "Loading..."])
        );
    }

    #[test]
    fn test_three_dots_empty_message() {
        assert_eq!(three_dots(""), owned(&[".", "..", "..."]));
    }

    #[test]
    fn test_arrow_spinner_is_stable() {
        let first = arrow_spinner();
        assert_eq!(first.len(), 8);
        assert_eq!(first, arrow_spinner());
        assert_eq!(first[0], "←");
        assert_eq!(first[4], "→");
    }

    #[test]
    fn test_vertical_bars_shape() {
        let bars = vertical_bars();
        assert_eq!(bars.len(), 14);
        assert_eq!(bars[7], "█");
        assert_eq!(bars.first(), bars.last());
    }

    #[test]
    fn test_streaching_bars_are_palindromic() {
        let bars = streaching_vertical_bars();
        assert_eq!(bars.len(), 13);
        let reversed: Frames = bars.iter().rev().cloned().collect();
        assert_eq!(bars, reversed);
        assert_eq!(bars[6], "▉");
    }

    #[test]
    fn test_spining_dots_cover_braille_block() {
        let dots = spining_dots();
        assert_eq!(dots.len(), 256);
        assert_eq!(dots[0], "\u{2800}");
        assert_eq!(dots[255], "\u{28FF}");
        assert!(dots.iter().all(|d| d.chars().count() == 1));

        let mut unique = dots.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 256);
    }

    #[test]
    fn test_spining_dots_fill_left_column_first() {
        let dots = spining_dots();
        insta::assert_snapshot!(dots[..10].concat(), @"⠀⠁⠂⠃⠄⠅⠆⠇⡀⡁");
        assert_eq!(dots[8], "\u{2840}");
        assert_eq!(dots[16], "\u{2808}");
        assert_eq!(dots[128], "\u{2880}");
    }

    #[test]
    fn test_loading_bar() {
        assert_eq!(
            loading_bar("=", 3, "~"),
            owned(&["[~~~]", "[=~~]", "[==~]"])
        );
    }

    #[test]
    fn test_loading_bar_defaults() {
        let bar = loading_bar_default();
        assert_eq!(bar.len(), 10);
        assert_eq!(bar[0], "[~~~~~~~~~~]");
        assert_eq!(bar[9], "[=========~]");
    }

    #[test]
    fn test_loading_bar_repeats_whole_strings() {
        let bar = loading_bar("<>", 2, "-.");
        insta::assert_snapshot!(bar.join(" "), @"[-.-.] [<>-.]");
    }

    #[test]
    fn test_loading_bar_zero_length() {
        assert!(loading_bar("=", 0, "~").is_empty());
    }

    #[test]
    fn test_fixed_table_lengths() {
        assert_eq!(bouncing_balls().len(), 10);
        assert_eq!(smiley().len(), 2);
        assert_eq!(monkeys().len(), 4);
        assert_eq!(hearts().len(), 5);
        assert_eq!(soccer().len(), 12);
        assert_eq!(aesthetic().len(), 8);
        assert_eq!(material().len(), 92);
    }

    #[test]
    fn test_bouncing_ball_track_width() {
        // Ball and brackets always occupy 8 cells
        assert!(bouncing_balls().iter().all(|f| f.chars().count() == 8));
    }

    #[test]
    fn test_material_rows_are_twenty_cells() {
        assert!(material().iter().all(|f| f.chars().count() == 20));
        assert!(material()
            .iter()
            .all(|f| f.chars().all(|c| c == '█' || c == '▁')));
    }

    #[test]
    fn test_material_drains_off_the_right_edge() {
        let sweep = material();
        assert_eq!(sweep[0], "█▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁");
        assert_eq!(sweep[41], "█▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████");
        assert_eq!(sweep[76], "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁█████");
        assert_eq!(sweep[77], "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁████");
        assert_eq!(sweep[91], "▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁");
    }

    #[test]
    fn test_aesthetic_table() {
        insta::assert_snapshot!(aesthetic()[..3].join(" "), @"▰▱▱▱▱▱▱ ▰▰▱▱▱▱▱ ▰▰▰▱▱▱▱");
    }

    #[test]
    fn test_prefix() {
        let original = owned(&["a", "b"]);
        let prefixed = prefix("> ", &original);
        assert_eq!(prefixed, owned(&["> a", "> b"]));
        assert_eq!(original, owned(&["a", "b"]));
    }

    #[test]
    fn test_suffix() {
        assert_eq!(suffix("...", &owned(&["x"])), owned(&["x..."]));
        assert!(suffix("!", &[]).is_empty());
    }

    #[test]
    fn test_prefix_and_suffix_compose() {
        let framed = suffix("]", &prefix("[", &arrow_spinner()));
        assert_eq!(framed.len(), 8);
        assert_eq!(framed[2], "[↑]");
    }
}
