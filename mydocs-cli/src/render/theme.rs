use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// The mydocs color palette.
pub struct Palette;

impl Palette {
    /// Skin used for Markdown blocks such as the version banner.
    pub fn default_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.headers[0].set_fg(Palette::PRIMARY);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Palette::SECONDARY);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].add_attr(Attribute::Underlined);

        skin.bold.set_fg(Palette::SECONDARY);
        skin.italic.set_fg(Palette::MUTED);
        skin.inline_code.set_fg(Palette::HIGHLIGHT);
        skin.inline_code.set_bg(Palette::CODE_BG);
        skin.table.set_fg(Palette::SECONDARY);

        skin
    }

    pub const PRIMARY: Color = Color::Rgb {
        r: 0xFF,
        g: 0x6B,
        b: 0x6B,
    }; // #FF6B6B
    pub const SECONDARY: Color = Color::Rgb {
        r: 0x4E,
        g: 0xCD,
        b: 0xC4,
    }; // #4ECDC4
    pub const SUCCESS: Color = Color::Rgb {
        r: 0x45,
        g: 0xB7,
        b: 0xD1,
    }; // #45B7D1
    pub const ERROR: Color = Color::Rgb {
        r: 0xFF,
        g: 0x6B,
        b: 0x6B,
    }; // #FF6B6B
    pub const MUTED: Color = Color::Rgb {
        r: 0x66,
        g: 0x66,
        b: 0x66,
    }; // #666666
    pub const ACCENT: Color = Color::Rgb {
        r: 0x96,
        g: 0xCE,
        b: 0xB4,
    }; // #96CEB4
    pub const HIGHLIGHT: Color = Color::Rgb {
        r: 0xFF,
        g: 0xD9,
        b: 0x3D,
    }; // #FFD93D
    pub const CODE_BG: Color = Color::Rgb {
        r: 0x33,
        g: 0x33,
        b: 0x33,
    }; // #333333
}
