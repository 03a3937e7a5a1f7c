//! Spreadsheet renderer.
//!
//! One bold header row plus one row per summary row, columns in fixed order.
//! Financial columns are formatted to 2 decimal places with thousands
//! separators; the underlying values keep full precision.

use rust_xlsxwriter::{Format, Workbook};

use super::error::ReportError;
use super::types::OrderSummaryRow;

/// Column headers in their fixed order.
const HEADERS: [&str; 8] = [
    "Order Number",
    "Execution Date",
    "Customer",
    "Total Sales",
    "Total Cost",
    "Sales VAT",
    "Cost VAT",
    "Net Amount",
];

/// Renders the rows as a complete XLSX workbook buffer.
pub fn render(rows: &[OrderSummaryRow]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Order Summary")?;

    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("#,##0.00");

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    worksheet.set_column_width(0, 15)?;
    worksheet.set_column_width(1, 15)?;
    worksheet.set_column_width(2, 25)?;
    for col in 3..8 {
        worksheet.set_column_width(col, 15)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.order_number)?;
        worksheet.write_string(r, 1, row.execution_date_text())?;
        worksheet.write_string(r, 2, &row.customer_name)?;
        worksheet.write_number_with_format(r, 3, row.total_sale, &money)?;
        worksheet.write_number_with_format(r, 4, row.total_cost, &money)?;
        worksheet.write_number_with_format(r, 5, row.vat_sale, &money)?;
        worksheet.write_number_with_format(r, 6, row.vat_cost, &money)?;
        worksheet.write_number_with_format(r, 7, row.net_amount, &money)?;
    }

    Ok(workbook.save_to_buffer()?)
}
