//! Style roles expressed as an enum + macro mapping logical names to `colored::Color`.
//!
//! Colouring is applied only when the `enabled` flag passed to `paint()` is
//! true, so callers decide once (from `--color`/`--no-color` or the TTY) and
//! no global state is touched.
//!
//! ```
//! use infoqueue::core::styles::StyleRole;
//! use infoqueue::queue::api::MessageSeverity;
//!
//! assert_eq!(StyleRole::Header.paint("Messages", false), "Messages");
//! let error = StyleRole::for_severity(MessageSeverity::Error).paint("ERROR", true);
//! assert!(error.starts_with("\x1b[") && error.ends_with("\x1b[0m"));
//! ```

use crate::queue::message::MessageSeverity;
use clap::builder::styling::AnsiColor;
use colored::Color;

macro_rules! style {
    ( $( $variant:ident => $color:expr ),+ $(,)? ) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum StyleRole { $( $variant ),+ }

        impl StyleRole {
            pub fn color(self) -> Option<Color> {
                match self { $( StyleRole::$variant => $color ),+ }
            }
        }
    }
}

// Value => None (uncoloured)
style! {
    Header     => Some(Color::Yellow),
    Key        => Some(Color::BrightGreen),
    Value      => None,
    Dim        => Some(Color::BrightBlack),
    Break      => Some(Color::BrightMagenta),
    Corruption => Some(Color::BrightRed),
    Error      => Some(Color::Red),
    Warning    => Some(Color::Yellow),
    Info       => Some(Color::Cyan),
    Message    => Some(Color::BrightBlack),
}

impl StyleRole {
    pub fn for_severity(severity: MessageSeverity) -> Self {
        match severity {
            MessageSeverity::Corruption => StyleRole::Corruption,
            MessageSeverity::Error => StyleRole::Error,
            MessageSeverity::Warning => StyleRole::Warning,
            MessageSeverity::Info => StyleRole::Info,
            MessageSeverity::Message => StyleRole::Message,
        }
    }

    pub fn ansi_code(self) -> Option<String> {
        map_color_code(self.color()?)
    }

    pub fn paint(self, text: &str, enabled: bool) -> String {
        match self.ansi_code() {
            Some(code) if enabled => format!("\x1b[{}m{}\x1b[0m", code, text),
            _ => text.to_string(),
        }
    }
}

fn map_color_code(c: Color) -> Option<String> {
    use Color::*;
    let code = match c {
        Black => "30",
        Red => "31",
        Green => "32",
        Yellow => "33",
        Blue => "34",
        Magenta => "35",
        Cyan => "36",
        White => "37",
        BrightBlack => "90",
        BrightRed => "91",
        BrightGreen => "92",
        BrightYellow => "93",
        BrightBlue => "94",
        BrightMagenta => "95",
        BrightCyan => "96",
        BrightWhite => "97",
        TrueColor { r, g, b } => return Some(format!("38;2;{};{};{}", r, g, b)),
        #[allow(unreachable_patterns)]
        _ => return None,
    };
    Some(code.to_string())
}

fn color_to_ansi(c: Color) -> Option<AnsiColor> {
    use self::AnsiColor as A;
    use Color::*;
    Some(match c {
        Red => A::Red,
        Green => A::Green,
        Yellow => A::Yellow,
        Cyan => A::Cyan,
        BrightBlack => A::BrightBlack,
        BrightRed => A::BrightRed,
        BrightGreen => A::BrightGreen,
        BrightMagenta => A::BrightMagenta,
        _ => return None,
    })
}

/// Build clap Styles for help output from the same roles
pub fn palette_to_clap(enabled: bool) -> clap::builder::Styles {
    use clap::builder::styling::{Color as ClapColor, Style};
    if !enabled {
        return clap::builder::Styles::plain();
    }

    let style = |role: StyleRole, bold: bool| {
        let mut s = Style::new();
        if let Some(col) = role.color().and_then(color_to_ansi) {
            s = s.fg_color(Some(ClapColor::Ansi(col)));
        }
        if bold {
            s = s.bold();
        }
        s
    };

    clap::builder::Styles::styled()
        .header(style(StyleRole::Header, true))
        .usage(style(StyleRole::Header, true))
        .literal(style(StyleRole::Key, false))
        .placeholder(style(StyleRole::Info, false))
        .error(style(StyleRole::Corruption, true))
}
