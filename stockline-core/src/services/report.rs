//! Report service - printable stock reports
//!
//! Builds the data for the exported stock report: products grouped by
//! category (sorted by name), an uncategorized section for dangling
//! references, and grand totals. Rendering stops at HTML and CSV; turning the
//! HTML into a PDF is the job of an external generator.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::currency::format_amount;
use crate::domain::result::Result;
use crate::domain::NO_CATEGORY_LABEL;
use crate::services::InventoryService;

/// One product line in the report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// All products of one category
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    pub category_name: String,
    pub lines: Vec<ReportLine>,
}

/// The full stock report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    pub sections: Vec<ReportSection>,
    pub uncategorized: Vec<ReportLine>,
    pub total_units: i64,
    pub total_value: Decimal,
}

/// Service for building and rendering stock reports
pub struct ReportService {
    inventory: Arc<InventoryService>,
}

impl ReportService {
    pub fn new(inventory: Arc<InventoryService>) -> Self {
        Self { inventory }
    }

    /// Build the report data for an owner
    pub async fn build(&self, owner_id: &str) -> Result<StockReport> {
        let mut categories = self.inventory.list_categories(owner_id).await?;
        let products = self.inventory.list_products(owner_id).await?;

        categories.sort_by(|a, b| a.name.cmp(&b.name));

        let mut total_units = 0i64;
        let mut total_value = Decimal::ZERO;
        for product in &products {
            total_units += product.quantity;
            total_value += product.stock_value();
        }

        let mut sections = Vec::new();
        for category in &categories {
            let lines: Vec<ReportLine> = products
                .iter()
                .filter(|p| p.category_id == category.id)
                .map(to_line)
                .collect();
            if !lines.is_empty() {
                sections.push(ReportSection {
                    category_name: category.name.clone(),
                    lines,
                });
            }
        }

        // Products whose category no longer exists land in their own section
        let uncategorized: Vec<ReportLine> = products
            .iter()
            .filter(|p| !categories.iter().any(|c| c.id == p.category_id))
            .map(to_line)
            .collect();

        Ok(StockReport {
            sections,
            uncategorized,
            total_units,
            total_value,
        })
    }

    /// Render the report as an HTML document body
    pub fn to_html(&self, report: &StockReport) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
        html.push_str("body { font-family: sans-serif; padding: 20px; }\n");
        html.push_str("table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }\n");
        html.push_str("th, td { border: 1px solid #ccc; padding: 6px; text-align: left; }\n");
        html.push_str(".category-header { font-weight: bold; margin: 12px 0 6px; }\n");
        html.push_str("</style>\n</head>\n<body>\n<h1>Stock Report</h1>\n");

        html.push_str("<h2>Summary</h2>\n<table>\n");
        html.push_str("<tr><th>Total units</th><th>Total stock value</th></tr>\n");
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n</table>\n",
            report.total_units,
            format_amount(report.total_value)
        ));

        for section in &report.sections {
            html.push_str(&format!(
                "<div class=\"category-header\">Category: {}</div>\n",
                section.category_name
            ));
            push_table(&mut html, &section.lines);
        }

        if !report.uncategorized.is_empty() {
            html.push_str("<h2>Products Without Category</h2>\n");
            push_table(&mut html, &report.uncategorized);
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Render the report as CSV
    pub fn to_csv(&self, report: &StockReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["category", "product", "quantity", "unitPrice", "subtotal"])?;

        for section in &report.sections {
            for line in &section.lines {
                write_line(&mut writer, &section.category_name, line)?;
            }
        }
        for line in &report.uncategorized {
            write_line(&mut writer, NO_CATEGORY_LABEL, line)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| crate::domain::result::Error::Other(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| crate::domain::result::Error::Other(e.to_string()))
    }
}

fn to_line(product: &crate::domain::Product) -> ReportLine {
    ReportLine {
        name: product.name.clone(),
        quantity: product.quantity,
        unit_price: product.unit_price,
        subtotal: product.stock_value(),
    }
}

fn push_table(html: &mut String, lines: &[ReportLine]) {
    html.push_str("<table>\n");
    html.push_str("<tr><th>Name</th><th>Quantity</th><th>Unit Price</th><th>Subtotal</th></tr>\n");
    for line in lines {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            line.name,
            line.quantity,
            format_amount(line.unit_price),
            format_amount(line.subtotal)
        ));
    }
    html.push_str("</table>\n");
}

fn write_line(
    writer: &mut csv::Writer<Vec<u8>>,
    category_name: &str,
    line: &ReportLine,
) -> Result<()> {
    writer.write_record([
        category_name,
        &line.name,
        &line.quantity.to_string(),
        &line.unit_price.to_string(),
        &line.subtotal.to_string(),
    ])?;
    Ok(())
}
