//! XML renderer.
//!
//! Emits a UTF-8 document with an `<OrderSummary>` root wrapping one
//! `<Order>` element per row. Text fields are escaped so embedded special
//! characters cannot break the document; numeric fields are formatted to
//! exactly 2 decimal places as plain text.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};

use super::error::ReportError;
use super::types::OrderSummaryRow;

/// Renders the rows as a complete XML document buffer.
pub fn render(rows: &[OrderSummaryRow]) -> Result<Vec<u8>, ReportError> {
    let mut buf = Vec::new();
    let mut writer = Writer::new_with_indent(&mut buf, b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(render_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("OrderSummary")))
        .map_err(render_err)?;

    for row in rows {
        write_order(&mut writer, row).map_err(render_err)?;
    }

    writer
        .write_event(Event::End(BytesStart::new("OrderSummary").to_end()))
        .map_err(render_err)?;

    Ok(buf)
}

fn write_order<W: std::io::Write>(
    writer: &mut Writer<W>,
    row: &OrderSummaryRow,
) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("Order")))?;

    write_text(writer, "OrderNumber", &row.order_number)?;
    write_text(writer, "ExecutionDate", &row.execution_date_text())?;
    write_text(writer, "CustomerName", &row.customer_name)?;
    write_money(writer, "TotalSale", row.total_sale)?;
    write_money(writer, "TotalCost", row.total_cost)?;
    write_money(writer, "VatSale", row.vat_sale)?;
    write_money(writer, "VatCost", row.vat_cost)?;
    write_money(writer, "NetAmount", row.net_amount)?;

    writer.write_event(Event::End(BytesStart::new("Order").to_end()))?;
    Ok(())
}

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &str,
) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesStart::new(tag).to_end()))?;
    Ok(())
}

fn write_money<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: f64,
) -> std::io::Result<()> {
    write_text(writer, tag, &format!("{value:.2}"))
}

fn render_err(err: std::io::Error) -> ReportError {
    ReportError::Render(err.to_string())
}
