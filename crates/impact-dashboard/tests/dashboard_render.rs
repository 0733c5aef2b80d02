use impact_dashboard::dashboard::render::{render_cost_chart, render_flow_chart, render_map};
use impact_dashboard::dashboard::{
    Artifact, ArtifactKind, DashboardData, DashboardPage, PageConfig, Theme, VariantConfig,
    VariantName,
};

fn compose(variant: VariantName) -> DashboardPage {
    DashboardPage::compose(
        PageConfig::standard(),
        &DashboardData::standard(),
        variant.config(),
    )
}

#[test]
fn one_artifact_per_table_with_matching_element_counts() {
    for variant in VariantName::ordered() {
        let page = compose(variant);
        assert_eq!(page.sections.len(), 3, "{variant} renders three sections");

        let counts: Vec<(ArtifactKind, usize)> = page
            .sections
            .iter()
            .map(|section| (section.artifact.kind(), section.artifact.element_count()))
            .collect();
        assert_eq!(
            counts,
            vec![
                (ArtifactKind::Map, 7),
                (ArtifactKind::CostChart, 3),
                (ArtifactKind::Flow, 3),
            ]
        );
    }
}

#[test]
fn map_includes_every_literal_country_and_prevalence() {
    let data = DashboardData::standard();
    let map = render_map(&data.countries, &VariantConfig::default(), &Theme::dark());
    let expected = [
        ("ECU", 32),
        ("USA", 75),
        ("IND", 150),
        ("NGA", 110),
        ("PER", 40),
        ("ZAF", 52),
        ("DEU", 28),
    ];

    for (code, prevalence) in expected {
        let region = map.region(code).expect("country present on map");
        assert_eq!(region.prevalence, prevalence, "prevalence for {code}");
    }

    let ecuador = map.region("ECU").expect("Ecuador present");
    assert_eq!(ecuador.name, "Ecuador");
    assert_eq!(ecuador.therapy_access_pct, 25);
}

#[test]
fn cost_labels_use_thousands_separators() {
    let data = DashboardData::standard();
    let chart = render_cost_chart(&data.costs, &VariantConfig::default(), &Theme::dark());
    assert_eq!(chart.labels(), vec!["$8,000", "$100,000", "$500,000"]);

    let heights: Vec<f64> = chart.bars.iter().map(|bar| bar.cost_usd).collect();
    assert_eq!(heights, vec![8_000.0, 100_000.0, 500_000.0]);
}

#[test]
fn flow_totals_hold_in_every_variant() {
    let data = DashboardData::standard();
    for variant in VariantName::ordered() {
        let flow = render_flow_chart(
            &data.flows,
            &data.flow_nodes,
            &variant.config(),
            &Theme::dark(),
        );
        assert_eq!(flow.outflow("High-Income Donors"), Some(240.0), "{variant}");
        assert_eq!(flow.outflow("Donation Mechanism"), Some(120.0), "{variant}");
        assert_eq!(flow.inflow("Low-Income Patients"), Some(120.0), "{variant}");
        assert_eq!(flow.inflow("NUCLIREGEN Therapies"), Some(120.0), "{variant}");
    }
}

#[test]
fn rendering_twice_is_identical() {
    for variant in VariantName::ordered() {
        let first = compose(variant);
        let second = compose(variant);
        assert_eq!(first, second);
        assert_eq!(first.to_html(), second.to_html());

        let first_json = serde_json::to_string(&first.view()).expect("view serializes");
        let second_json = serde_json::to_string(&second.view()).expect("view serializes");
        assert_eq!(first_json, second_json);
    }
}

#[test]
fn rendering_leaves_source_tables_untouched() {
    let data = DashboardData::standard();
    let before = serde_json::to_vec(&data).expect("tables serialize");

    let _ = DashboardPage::compose(PageConfig::standard(), &data, VariantConfig::default());
    let _ = DashboardPage::compose(PageConfig::standard(), &data, VariantName::Ember.config());

    let after = serde_json::to_vec(&data).expect("tables serialize");
    assert_eq!(before, after);
    assert_eq!(data, DashboardData::standard());
}

#[test]
fn variants_differ_only_in_presentation() {
    let orbital = compose(VariantName::Orbital).view();
    let atlas = compose(VariantName::Atlas).view();

    let map_of = |view: &impact_dashboard::dashboard::PageView| view.sections[0].figure.clone();
    let orbital_map = map_of(&orbital);
    let atlas_map = map_of(&atlas);

    assert_eq!(orbital_map["data"][0]["z"], atlas_map["data"][0]["z"]);
    assert_eq!(
        orbital_map["data"][0]["locations"],
        atlas_map["data"][0]["locations"]
    );
    assert_ne!(
        orbital_map["layout"]["geo"]["projection"]["type"],
        atlas_map["layout"]["geo"]["projection"]["type"]
    );
    assert_ne!(
        orbital_map["data"][0]["colorscale"],
        atlas_map["data"][0]["colorscale"]
    );
}

#[test]
fn page_view_reports_sections_for_the_api() {
    let view = compose(VariantName::Horizon).view();
    assert_eq!(view.variant, VariantName::Horizon);
    assert_eq!(view.sections[1].element_count, 3);
    assert_eq!(view.sections[1].figure["data"][2]["text"][0], "$500,000");

    let page = compose(VariantName::Horizon);
    match &page.section(ArtifactKind::Flow).expect("flow section").artifact {
        Artifact::Flow(flow) => assert_eq!(flow.links.len(), 3),
        other => panic!("unexpected artifact {:?}", other.kind()),
    }
}
