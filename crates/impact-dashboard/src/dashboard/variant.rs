use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named A/B presentation presets. All presets render the same tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantName {
    #[default]
    Orbital,
    Atlas,
    Ember,
    Mercator,
    Horizon,
}

impl VariantName {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Orbital,
            Self::Atlas,
            Self::Ember,
            Self::Mercator,
            Self::Horizon,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orbital => "orbital",
            Self::Atlas => "atlas",
            Self::Ember => "ember",
            Self::Mercator => "mercator",
            Self::Horizon => "horizon",
        }
    }

    pub const fn config(self) -> VariantConfig {
        match self {
            Self::Orbital => VariantConfig {
                name: self,
                color_scale: ColorScale::Plasma,
                reverse_scale: true,
                projection: MapProjection::Orthographic,
                bar_style: BarStyle::Flat,
                node_ordering: NodeOrdering::Declared,
            },
            Self::Atlas => VariantConfig {
                name: self,
                color_scale: ColorScale::Viridis,
                reverse_scale: false,
                projection: MapProjection::NaturalEarth,
                bar_style: BarStyle::Flat,
                node_ordering: NodeOrdering::Declared,
            },
            Self::Ember => VariantConfig {
                name: self,
                color_scale: ColorScale::Inferno,
                reverse_scale: true,
                projection: MapProjection::Orthographic,
                bar_style: BarStyle::Shaded,
                node_ordering: NodeOrdering::Reversed,
            },
            Self::Mercator => VariantConfig {
                name: self,
                color_scale: ColorScale::Cividis,
                reverse_scale: false,
                projection: MapProjection::Mercator,
                bar_style: BarStyle::Flat,
                node_ordering: NodeOrdering::Reversed,
            },
            Self::Horizon => VariantConfig {
                name: self,
                color_scale: ColorScale::Turbo,
                reverse_scale: false,
                projection: MapProjection::Robinson,
                bar_style: BarStyle::Shaded,
                node_ordering: NodeOrdering::Declared,
            },
        }
    }
}

impl fmt::Display for VariantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dashboard variant '{0}' (expected one of orbital, atlas, ember, mercator, horizon)")]
pub struct UnknownVariant(pub String);

impl FromStr for VariantName {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| UnknownVariant(value.trim().to_string()))
    }
}

/// Cosmetic knobs that distinguish one preset from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantConfig {
    pub name: VariantName,
    pub color_scale: ColorScale,
    pub reverse_scale: bool,
    pub projection: MapProjection,
    pub bar_style: BarStyle,
    pub node_ordering: NodeOrdering,
}

impl Default for VariantConfig {
    fn default() -> Self {
        VariantName::default().config()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScale {
    Plasma,
    Viridis,
    Inferno,
    Cividis,
    Turbo,
}

impl ColorScale {
    /// Evenly spaced sequential stops, low to high.
    pub const fn colors(self) -> &'static [&'static str] {
        match self {
            Self::Plasma => &[
                "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953",
                "#fb9f3a", "#fdca26", "#f0f921",
            ],
            Self::Viridis => &[
                "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779",
                "#6ece58", "#b5de2b", "#fde725",
            ],
            Self::Inferno => &[
                "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925",
                "#fb9b06", "#f7d13d", "#fcffa4",
            ],
            Self::Cividis => &[
                "#00224e", "#123570", "#3b496c", "#575d6d", "#707173", "#8a8678", "#a59c74",
                "#c3b369", "#e1cc55", "#fee838",
            ],
            Self::Turbo => &[
                "#30123b", "#4145ab", "#4675ed", "#39a2fc", "#1bcfd4", "#24eca6", "#61fc6c",
                "#a4fc3b", "#d1e834", "#f3c63a", "#fe9b2d", "#f36315", "#d93806", "#b11901",
                "#7a0402",
            ],
        }
    }

    /// `[position, color]` pairs in the shape plotly.js expects for `colorscale`.
    pub fn stops(self, reversed: bool) -> Vec<(f64, &'static str)> {
        let colors = self.colors();
        let last = (colors.len() - 1) as f64;
        let ordered: Vec<&'static str> = if reversed {
            colors.iter().rev().copied().collect()
        } else {
            colors.to_vec()
        };
        ordered
            .into_iter()
            .enumerate()
            .map(|(idx, color)| (idx as f64 / last, color))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapProjection {
    Orthographic,
    NaturalEarth,
    Mercator,
    Robinson,
}

impl MapProjection {
    /// Value for `layout.geo.projection.type`.
    pub const fn plotly_type(self) -> &'static str {
        match self {
            Self::Orthographic => "orthographic",
            Self::NaturalEarth => "natural earth",
            Self::Mercator => "mercator",
            Self::Robinson => "robinson",
        }
    }

    /// Only the globe can be spun, so it is the one that gets rotation handles.
    pub const fn is_globe(self) -> bool {
        matches!(self, Self::Orthographic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarStyle {
    Flat,
    /// Pseudo-3D: outlined, translucent, hatched bars.
    Shaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeOrdering {
    Declared,
    Reversed,
}

impl NodeOrdering {
    /// Maps a declared node index to its drawn position, or `None` when the
    /// index names no node.
    pub fn position(self, index: usize, node_count: usize) -> Option<usize> {
        if index >= node_count {
            return None;
        }
        match self {
            Self::Declared => Some(index),
            Self::Reversed => (node_count - 1).checked_sub(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Orbital".parse::<VariantName>(), Ok(VariantName::Orbital));
        assert_eq!(" horizon ".parse::<VariantName>(), Ok(VariantName::Horizon));
        assert_eq!(
            "neon".parse::<VariantName>(),
            Err(UnknownVariant("neon".to_string()))
        );
    }

    #[test]
    fn every_preset_round_trips_through_its_name() {
        for name in VariantName::ordered() {
            assert_eq!(name.to_string().parse::<VariantName>(), Ok(name));
            assert_eq!(name.config().name, name);
        }
    }

    #[test]
    fn default_preset_is_the_orthographic_globe() {
        let config = VariantConfig::default();
        assert_eq!(config.name, VariantName::Orbital);
        assert_eq!(config.projection, MapProjection::Orthographic);
        assert_eq!(config.color_scale, ColorScale::Plasma);
        assert!(config.reverse_scale);
    }

    #[test]
    fn stops_span_the_unit_interval() {
        let stops = ColorScale::Plasma.stops(true);
        assert_eq!(stops.first(), Some(&(0.0, "#f0f921")));
        assert_eq!(stops.last(), Some(&(1.0, "#0d0887")));
    }

    #[test]
    fn reversed_ordering_mirrors_positions() {
        assert_eq!(NodeOrdering::Reversed.position(0, 4), Some(3));
        assert_eq!(NodeOrdering::Reversed.position(3, 4), Some(0));
        assert_eq!(NodeOrdering::Declared.position(2, 4), Some(2));
    }

    #[test]
    fn out_of_range_indices_have_no_position() {
        assert_eq!(NodeOrdering::Reversed.position(7, 4), None);
        assert_eq!(NodeOrdering::Reversed.position(4, 4), None);
        assert_eq!(NodeOrdering::Declared.position(4, 4), None);
        assert_eq!(NodeOrdering::Reversed.position(0, 0), None);
    }
}
