/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const LIGHT_GRAY: Color = Color::new(200, 200, 200, 255);
    pub const BLUE: Color = Color::new(0, 121, 241, 255);
    pub const LIME: Color = Color::new(0, 158, 47, 255);
    pub const GOLD: Color = Color::new(255, 203, 0, 255);
    pub const MAROON: Color = Color::new(190, 33, 55, 255);
    pub const PURPLE: Color = Color::new(200, 122, 255, 255);
    pub const DARK_PURPLE: Color = Color::new(112, 31, 126, 255);
    pub const SKY_BLUE: Color = Color::new(102, 191, 255, 255);
    pub const RAY_WHITE: Color = Color::new(245, 245, 245, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);

    /// Same color with alpha scaled by `alpha` (0..=1)
    pub fn fade(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self {
            a: (self.a as f32 * alpha).round() as u8,
            ..self
        }
    }

    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_f32_array();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
