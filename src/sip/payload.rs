use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

//sip results in the same wire shape as the chart payload, with MM-YYYY
//month strings in place of integer year labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SipPayload {
    pub labels: Vec<String>,
    pub dataset1: Vec<f64>,
    pub dataset2: Vec<f64>,
    pub dataset1_name: String,
    pub dataset2_name: String,
    pub color1: String,
    pub color2: String,
}

impl SipPayload {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    //prints the payload as a formatted terminal table
    pub fn pretty_print_table(&self) {
        let mut table = Table::new();

        table.add_row(Row::new(vec![
            Cell::new("Month"),
            Cell::new(&self.dataset1_name),
            Cell::new(&self.dataset2_name),
        ]));

        for (i, label) in self.labels.iter().enumerate() {
            table.add_row(Row::new(vec![
                Cell::new(label),
                Cell::new(&format!("{:.2}", self.dataset1[i])),
                Cell::new(&format!("{:.2}", self.dataset2[i])),
            ]));
        }

        table.printstd();
    }
}
