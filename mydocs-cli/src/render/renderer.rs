use super::theme::Palette;
use mydocs_core::Notifier;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

/// Turns plain messages into terminal output.
///
/// The `style_*` functions only build strings; the `print_*` ones write them.
pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: Palette::default_skin(),
            opts,
        }
    }

    pub fn style_success(&self, message: &str) -> String {
        self.decorate("✅", message, Palette::SUCCESS, true)
    }

    pub fn style_info(&self, message: &str) -> String {
        self.decorate("📝", message, Palette::ACCENT, false)
    }

    pub fn style_error(&self, message: &str) -> String {
        self.decorate("❌", message, Palette::ERROR, true)
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{}", self.style_error(message));
    }

    fn decorate(&self, icon: &str, message: &str, color: Color, bold: bool) -> String {
        let text = format!("{icon} {message}");
        if !self.opts.use_color {
            return text;
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

impl Notifier for Renderer {
    fn notify_success(&self, message: &str) {
        println!("{}", self.style_success(message));
    }

    fn notify_info(&self, message: &str) {
        println!("{}", self.style_info(message));
    }
}
