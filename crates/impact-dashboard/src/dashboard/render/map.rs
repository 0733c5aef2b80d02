use super::base_layout;
use crate::dashboard::domain::CountryRecord;
use crate::dashboard::theme::Theme;
use crate::dashboard::variant::{ColorScale, MapProjection, VariantConfig};
use serde::Serialize;
use serde_json::{json, Value};

const MAP_TITLE: &str = "Estimated Prevalence of Progeria & Therapy Access";
const MAP_HEIGHT: u32 = 650;
const COLOR_AXIS_TITLE: &str = "Estimated Prevalence";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapRegion {
    pub code: &'static str,
    pub name: &'static str,
    pub prevalence: u32,
    pub therapy_access_pct: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapArtifact {
    pub title: String,
    pub regions: Vec<MapRegion>,
    pub color_scale: ColorScale,
    pub reverse_scale: bool,
    pub projection: MapProjection,
    pub height: u32,
    pub theme: Theme,
}

impl MapArtifact {
    pub fn region(&self, code: &str) -> Option<&MapRegion> {
        self.regions.iter().find(|region| region.code == code)
    }

    pub fn figure(&self) -> Value {
        let locations: Vec<&str> = self.regions.iter().map(|region| region.code).collect();
        let prevalence: Vec<u32> = self.regions.iter().map(|region| region.prevalence).collect();
        let names: Vec<&str> = self.regions.iter().map(|region| region.name).collect();
        let access: Vec<u8> = self
            .regions
            .iter()
            .map(|region| region.therapy_access_pct)
            .collect();

        let trace = json!({
            "type": "choropleth",
            "locationmode": "ISO-3",
            "locations": locations,
            "z": prevalence,
            "text": names,
            "customdata": access,
            "hovertemplate": "<b>%{text}</b><br>Estimated Prevalence: %{z}<br>Access to Therapy: %{customdata}%<extra></extra>",
            "colorscale": self.color_scale.stops(self.reverse_scale),
            "marker": { "line": { "color": self.theme.grid, "width": 0.5 } },
            "colorbar": { "title": { "text": COLOR_AXIS_TITLE } },
        });

        let mut projection = json!({ "type": self.projection.plotly_type() });
        if self.projection.is_globe() {
            projection["rotation"] = json!({ "lon": -40, "lat": 10 });
        }

        let mut layout = base_layout(&self.title, self.height, &self.theme);
        layout.insert(
            "margin".to_string(),
            json!({ "l": 0, "r": 0, "t": 50, "b": 0 }),
        );
        layout.insert(
            "geo".to_string(),
            json!({
                "projection": projection,
                "showframe": true,
                "showcoastlines": true,
                "showocean": true,
                "oceancolor": self.theme.background,
                "bgcolor": self.theme.surface,
                "landcolor": self.theme.grid,
            }),
        );

        json!({ "data": [trace], "layout": layout })
    }
}

/// One region per country; fill encodes prevalence, hover shows name and access.
pub fn render_map(countries: &[CountryRecord], variant: &VariantConfig, theme: &Theme) -> MapArtifact {
    let regions = countries
        .iter()
        .map(|country| MapRegion {
            code: country.code,
            name: country.name,
            prevalence: country.prevalence,
            therapy_access_pct: country.therapy_access_pct,
        })
        .collect();

    MapArtifact {
        title: MAP_TITLE.to_string(),
        regions,
        color_scale: variant.color_scale,
        reverse_scale: variant.reverse_scale,
        projection: variant.projection,
        height: MAP_HEIGHT,
        theme: theme.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::DashboardData;
    use crate::dashboard::variant::VariantName;

    #[test]
    fn figure_carries_codes_values_and_hover_fields() {
        let data = DashboardData::standard();
        let map = render_map(&data.countries, &VariantConfig::default(), &Theme::dark());
        let figure = map.figure();
        let trace = &figure["data"][0];

        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locations"][2], "IND");
        assert_eq!(trace["z"][2], 150);
        assert_eq!(trace["text"][2], "India");
        assert_eq!(trace["customdata"][2], 30);
        assert_eq!(figure["layout"]["geo"]["projection"]["type"], "orthographic");
        assert_eq!(figure["layout"]["height"], 650);
    }

    #[test]
    fn flat_projections_have_no_rotation() {
        let data = DashboardData::standard();
        let map = render_map(
            &data.countries,
            &VariantName::Atlas.config(),
            &Theme::dark(),
        );
        let projection = &map.figure()["layout"]["geo"]["projection"];
        assert_eq!(projection["type"], "natural earth");
        assert!(projection.get("rotation").is_none());
    }
}
