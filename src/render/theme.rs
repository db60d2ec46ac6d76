/// Color palette for the rendered SVG.
///
/// All values are CSS color strings so a palette can be loaded from JSON.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    /// Page background.
    pub bg: String,
    /// Cell border stroke.
    pub border: String,
    /// Fill for inactive (level 0) cells.
    pub empty: String,
    /// Fills for levels 1 through 4.
    pub levels: [String; 4],
    /// Fill a cell flips to once the zombie reaches it.
    pub infected: String,
    /// Accent color for the zombie trail.
    pub zombie: String,
    /// Title and footer text color.
    pub text: String,
}

impl Theme {
    /// GitHub dark-mode palette.
    pub fn dark() -> Self {
        Self {
            bg: "#0d1117".into(),
            border: "#30363d".into(),
            empty: "#161b22".into(),
            levels: [
                "#0e4429".into(),
                "#006d32".into(),
                "#26a641".into(),
                "#39d353".into(),
            ],
            infected: "#f85149".into(),
            zombie: "#ffa657".into(),
            text: "#f0f6fc".into(),
        }
    }

    /// GitHub light-mode palette.
    pub fn light() -> Self {
        Self {
            bg: "#ffffff".into(),
            border: "#d0d7de".into(),
            empty: "#ebedf0".into(),
            levels: [
                "#9be9a8".into(),
                "#40c463".into(),
                "#30a14e".into(),
                "#216e39".into(),
            ],
            infected: "#d1242f".into(),
            zombie: "#fb8500".into(),
            text: "#24292f".into(),
        }
    }

    /// Fill color for a given activity level.
    pub fn level_fill(&self, level: u8) -> &str {
        match level {
            0 => &self.empty,
            n => &self.levels[usize::from(n.min(4)) - 1],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/theme.rs"]
mod tests;
