use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::summary::PeriodSummary;

pub fn tabulate_summary(summary: &[PeriodSummary]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Period".into(), "Games".into(), "Personal".into(), "Combined".into()],
        ));
    for period in summary {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                period.period.to_string().into(),
                format!("{}", period.samples).into(),
                format_mean(period.personal_mean).into(),
                format_mean(period.combined_mean).into(),
            ],
        ));
    }
    table
}

fn format_mean(mean: Option<f64>) -> String {
    mean.map(|mean| format!("{mean:.1}")).unwrap_or_else(|| "-".to_owned())
}

#[cfg(test)]
mod tests {
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    use super::*;
    use crate::domain::ScoringPeriod;

    #[test]
    fn renders_rows() {
        let summary = [
            PeriodSummary {
                period: ScoringPeriod::Game,
                samples: 2,
                personal_mean: Some(107.5),
                combined_mean: Some(212.5),
            },
            PeriodSummary {
                period: ScoringPeriod::Quarter1,
                samples: 0,
                personal_mean: None,
                combined_mean: None,
            },
        ];
        let table = tabulate_summary(&summary);
        assert_eq!(3, table.num_rows());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Матч"), "{rendered}");
        assert!(rendered.contains("212.5"), "{rendered}");
        assert!(rendered.contains("1 четверть"), "{rendered}");
    }
}
