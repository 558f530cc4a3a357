//! Tests for chart spec builders.

use super::*;
use crate::chart::Theme;
use crate::data::{
    CountryRecord, EngagementTrend, MentionTypeRecord, MetricSnapshot, RepostsDynamics, ViewsTrend,
};

fn snapshot() -> MetricSnapshot {
    MetricSnapshot::builtin().unwrap()
}

fn empty_snapshot() -> MetricSnapshot {
    let mut snapshot = snapshot();
    snapshot.citation_trend.labels.clear();
    snapshot.citation_trend.values.clear();
    snapshot.mentions_by_topic.clear();
    snapshot.mentions_by_country.clear();
    snapshot.mentions_by_type.clear();
    snapshot.reposts_dynamics = RepostsDynamics::default();
    snapshot.views_trend = ViewsTrend::default();
    snapshot.engagement_trend = EngagementTrend::default();
    snapshot
}

mod determinism_tests {
    use super::*;

    #[test]
    fn same_inputs_produce_equal_specs() {
        let snapshot = snapshot();
        for theme in [Theme::Light, Theme::Dark] {
            let palette = theme.palette();
            for lang in Lang::ALL {
                for key in ChartKey::ALL {
                    let first = build(key, &snapshot, lang, &palette);
                    let second = build(key, &snapshot, lang, &palette);
                    assert_eq!(first, second, "{key} differs for {lang}/{theme}");
                }
            }
        }
    }

    #[test]
    fn build_dispatches_to_matching_key() {
        let snapshot = snapshot();
        let palette = Theme::Dark.palette();
        for key in ChartKey::ALL {
            assert_eq!(build(key, &snapshot, Lang::Ru, &palette).key, key);
        }
    }

    #[test]
    fn spec_title_matches_card_heading() {
        let snapshot = snapshot();
        let palette = Theme::Dark.palette();
        for key in ChartKey::ALL {
            for lang in [Lang::Ru, Lang::En] {
                let spec = build(key, &snapshot, lang, &palette);
                assert_eq!(spec.title, tr(key.title(), lang), "{key}");
            }
        }
    }
}

mod language_tests {
    use super::*;

    #[test]
    fn citation_labels_do_not_depend_on_language() {
        let snapshot = snapshot();
        let palette = Theme::Dark.palette();
        let ru = citation_chart(&snapshot, Lang::Ru, &palette);
        let en = citation_chart(&snapshot, Lang::En, &palette);
        assert_eq!(ru.labels, en.labels);
        assert_eq!(ru.datasets, en.datasets);
    }

    #[test]
    fn language_dependent_charts_change_labels_or_series_names() {
        let snapshot = snapshot();
        let palette = Theme::Dark.palette();
        for key in ChartKey::language_dependent() {
            let ru = build(key, &snapshot, Lang::Ru, &palette);
            let en = build(key, &snapshot, Lang::En, &palette);
            let ru_names: Vec<_> = ru.datasets.iter().map(|d| &d.label).collect();
            let en_names: Vec<_> = en.datasets.iter().map(|d| &d.label).collect();
            assert!(
                ru.labels != en.labels || ru_names != en_names,
                "{key} is identical across languages"
            );
        }
    }

    #[test]
    fn topics_resolve_bilingual_names() {
        let snapshot = snapshot();
        let spec = topics_chart(&snapshot, Lang::En);
        assert_eq!(spec.labels[0], "News & Media");
        assert_eq!(spec.labels[5], "Other");
        let spec = topics_chart(&snapshot, Lang::Ru);
        assert_eq!(spec.labels[2], "Блоги");
    }
}

mod shape_tests {
    use super::*;

    #[test]
    fn citation_has_fixed_range() {
        let spec = citation_chart(&snapshot(), Lang::Ru, &Theme::Dark.palette());
        let y = spec.scale(AxisId::Y).unwrap();
        assert_eq!(y.min, Some(470.0));
        assert_eq!(y.max, Some(490.0));
        assert_eq!(spec.scale(AxisId::X).unwrap().ticks.max_ticks, Some(10));
        assert_eq!(spec.tooltip_text(0, 29).unwrap(), "Index: 479.5");
    }

    #[test]
    fn topics_is_doughnut_with_data_colors() {
        let spec = topics_chart(&snapshot(), Lang::Ru);
        assert_eq!(spec.kind, ChartKind::Doughnut);
        assert!(spec.scales.is_empty());
        assert_eq!(spec.cutout, Some(0.65));
        assert_eq!(spec.datasets[0].colors[1], "#8b5cf6");
        assert_eq!(spec.tooltip_text(0, 0).unwrap(), "596 (25.2%)");
    }

    #[test]
    fn reposts_has_two_localized_series() {
        let spec = reposts_chart(&snapshot(), Lang::En, &Theme::Dark.palette());
        assert_eq!(spec.datasets.len(), 2);
        assert_eq!(spec.datasets[0].label, "Mentions");
        assert_eq!(spec.datasets[1].label, "Reposts");
        assert!(spec.scale(AxisId::Y).unwrap().begin_at_zero);

        let ru = reposts_chart(&snapshot(), Lang::Ru, &Theme::Dark.palette());
        assert_eq!(ru.datasets[0].label, "Упоминания");
    }

    #[test]
    fn views_use_magnitude_format() {
        let spec = views_chart(&snapshot(), Lang::En, &Theme::Dark.palette());
        let y = spec.scale(AxisId::Y).unwrap();
        assert_eq!(y.ticks.format, TickFormat::Magnitude);
        assert_eq!(y.ticks.format.format(2_500_000.0), "2.5M");
        assert_eq!(spec.tooltip_text(0, 3).unwrap(), "2.5M views");

        let ru = views_chart(&snapshot(), Lang::Ru, &Theme::Dark.palette());
        assert_eq!(ru.tooltip_text(0, 0).unwrap(), "1.0M просмотров");
    }

    #[test]
    fn engagement_has_independent_axes() {
        let spec = engagement_chart(&snapshot(), Lang::En, &Theme::Dark.palette());
        let left = spec.scale(AxisId::Y).unwrap();
        let right = spec.scale(AxisId::Y1).unwrap();
        assert_eq!(left.position, AxisPosition::Left);
        assert_eq!(left.ticks.format.format(0.9), "0.9%");
        assert_eq!(right.position, AxisPosition::Right);
        assert!(!right.grid.display);
        assert_eq!(spec.datasets[0].axis, AxisId::Y);
        assert_eq!(spec.datasets[1].axis, AxisId::Y1);
        assert!(spec.datasets[1].dashed);
        assert_eq!(spec.datasets[1].label, "Interactions");
    }

    #[test]
    fn country_labels_carry_flags() {
        let spec = country_chart(&snapshot(), Lang::En, &Theme::Dark.palette());
        assert_eq!(spec.index_axis, IndexAxis::Y);
        assert_eq!(spec.labels[0], "🇺🇿 Uzbekistan");
        assert_eq!(spec.tooltip_text(0, 3).unwrap(), "1 (0.04%)");
    }

    #[test]
    fn country_colors_cycle() {
        let mut snapshot = snapshot();
        snapshot.mentions_by_country.push(CountryRecord {
            country: "Германия / Germany".into(),
            count: 2,
            percentage: 0.1,
            flag: "🇩🇪".to_string(),
        });
        let spec = country_chart(&snapshot, Lang::En, &Theme::Dark.palette());
        assert_eq!(spec.datasets[0].color_at(5), spec.datasets[0].color_at(0));
    }

    #[test]
    fn mention_type_labels_are_truncated() {
        let mut snapshot = snapshot();
        snapshot.mentions_by_type.push(MentionTypeRecord {
            kind: "Очень длинное название типа / A very long mention type name".into(),
            count: 1,
            percentage: 0.1,
        });
        let spec = mention_type_chart(&snapshot, Lang::En, &Theme::Dark.palette());
        assert_eq!(spec.labels[0], "Individual");
        assert_eq!(spec.labels[5], "A very long mention ...");
        assert!(spec.labels.iter().all(|l| l.chars().count() <= 23));
    }

    #[test]
    fn palette_colors_flow_into_scales() {
        let light = Theme::Light.palette();
        let spec = reposts_chart(&snapshot(), Lang::Ru, &light);
        for scale in &spec.scales {
            assert_eq!(scale.ticks.color, light.text_color);
            assert_eq!(scale.grid.color, light.grid_color);
        }
    }
}

mod empty_tests {
    use super::*;

    #[test]
    fn empty_collections_build_valid_specs() {
        let snapshot = empty_snapshot();
        let palette = Theme::Dark.palette();
        for key in ChartKey::ALL {
            let spec = build(key, &snapshot, Lang::En, &palette);
            assert!(spec.labels.is_empty(), "{key} has labels");
            assert_eq!(spec.point_count(), 0, "{key} has points");
            assert!(spec.tooltip_text(0, 0).is_none());
        }
    }
}
