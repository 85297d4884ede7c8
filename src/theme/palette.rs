use ratatui::style::Color;

/// The colors a [`super::Theme`] is derived from. Names follow Catppuccin's
/// roles; other palettes map their closest shade onto each role.
pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub subtext1: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub overlay1: Color,
    pub blue: Color,
    pub lavender: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub red: Color,
}

/// Darkens an `Rgb` color towards black; used for the active-row tint.
pub fn dim_color(c: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match c {
        Color::Rgb(r, g, b) => {
            let scale = |v: u8| (f32::from(v) * factor).round() as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_color() {
        assert_eq!(dim_color(Color::Rgb(200, 100, 10), 0.5), Color::Rgb(100, 50, 5));
        assert_eq!(dim_color(Color::Rgb(200, 100, 10), 2.0), Color::Rgb(200, 100, 10));
        assert_eq!(dim_color(Color::Red, 0.5), Color::Red);
    }
}
