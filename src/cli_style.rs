use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::Stylize;

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Color Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const CYAN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const MAGENTA: Color = Color::Rgb {
        r: 255,
        g: 0,
        b: 255,
    };
    pub const PURPLE: Color = Color::Rgb {
        r: 180,
        g: 100,
        b: 255,
    };
    pub const PINK: Color = Color::Rgb {
        r: 255,
        g: 105,
        b: 180,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Markers
// ═══════════════════════════════════════════════════════════════════════════════

pub mod marks {
    pub const ARROW_RIGHT: &str = "▶";
    pub const CHECK: &str = "✓";
    pub const CROSS_MARK: &str = "✗";
}

// ═══════════════════════════════════════════════════════════════════════════════
// Banner
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_banner() {
    let banner = r#"
    ███████╗██╗    ██╗██████╗ ██╗     ██████╗
    ██╔════╝██║    ██║██╔══██╗██║     ██╔══██╗
    ███████╗██║ █╗ ██║██████╔╝██║     ██████╔╝
    ╚════██║██║███╗██║██╔══██╗██║     ██╔══██╗
    ███████║╚███╔███╔╝██║  ██║███████╗██║  ██║
    ╚══════╝ ╚══╝╚══╝ ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝
"#;

    // Print with gradient effect
    let lines: Vec<&str> = banner.lines().collect();
    let gradient_colors = [
        colors::CYAN,
        colors::CYAN,
        colors::PURPLE,
        colors::PURPLE,
        colors::MAGENTA,
        colors::MAGENTA,
        colors::PINK,
        colors::PINK,
    ];

    for (i, line) in lines.iter().enumerate() {
        let color = gradient_colors.get(i).unwrap_or(&colors::CYAN);
        println!("{}", line.with(*color).bold());
    }

    let subtitle = "  ═══════════════════  REQUEST LOG MONITOR  ═══════════════════";
    println!("{}", subtitle.with(colors::DIM));
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Status Indicators
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_error(message: &str) {
    println!(
        " {} {}",
        marks::CROSS_MARK.with(colors::RED).bold(),
        message.with(colors::RED)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Goodbye Message
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_goodbye() {
    println!();
    println!(
        "  {} {}",
        "👋".with(colors::CYAN),
        "Goodbye! Stopped watching the request log"
            .with(colors::PURPLE)
            .bold()
    );
    println!();
}
