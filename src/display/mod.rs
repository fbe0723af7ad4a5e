use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::size::{Rule, Scenario, SizeReport};

impl SizeReport {
    fn render(&self) -> String {
        let scenario = match self.scenario {
            Scenario::MeanTest => "one-sample mean t-test".to_string(),
            Scenario::SlopeTest { covariate, .. } => {
                format!("OLS slope t-test, {} covariate", covariate.label())
            }
        };

        let mut title = Table::new();
        title
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .add_row(vec![Cell::new(format!(
                "Empirical size, {} at nominal α = {}",
                scenario, self.alpha
            ))
            .set_alignment(CellAlignment::Center)]);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                std::iter::once(Cell::new("Errors"))
                    .chain(std::iter::once(Cell::new("n")))
                    .chain(Rule::ALL.iter().map(|rule| Cell::new(rule.label())))
                    .chain(std::iter::once(Cell::new("skipped")))
                    .map(|c| c.set_alignment(CellAlignment::Center))
                    .collect::<Vec<_>>(),
            );

        for cell in &self.cells {
            let mut row = vec![
                Cell::new(cell.law.label()).set_alignment(CellAlignment::Left),
                Cell::new(cell.n).set_alignment(CellAlignment::Right),
            ];
            for rule in Rule::ALL {
                let size = cell.tally.size(rule);
                let text = if size.is_nan() {
                    "—".to_string()
                } else {
                    format!("{:.4}", size)
                };
                row.push(Cell::new(text).set_alignment(CellAlignment::Right));
            }
            row.push(Cell::new(cell.tally.degenerate).set_alignment(CellAlignment::Right));
            table.add_row(row);
        }

        format!("{}\n{}", title, table)
    }
}

impl Display for SizeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
