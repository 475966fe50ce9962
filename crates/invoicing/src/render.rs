//! PDF drawing for an [`InvoicePlan`].
//!
//! A4 portrait, built-in Helvetica faces, offsets in mm from the bottom-left
//! corner. The item table re-draws its header on every continuation page;
//! the organization header and metadata block appear on the first page only.

use std::io::Cursor;

use printpdf::image_crate::codecs::{jpeg::JpegDecoder, png::PngDecoder};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point,
};
use tracing::warn;

use bahikhata_core::format_rupees;
use bahikhata_orgs::{Logo, LogoFormat};

use crate::error::InvoicingError;
use crate::plan::{InvoicePlan, TableRow};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_RIGHT: f32 = 195.0;

// Item table column offsets (hardcoded to match the printed form).
const COL_SN: f32 = MARGIN_LEFT;
const COL_NAME: f32 = 30.0;
const COL_QTY_RIGHT: f32 = 132.0;
const COL_RATE_RIGHT: f32 = 160.0;
const COL_AMOUNT_RIGHT: f32 = MARGIN_RIGHT;

// Metadata block: label/value columns on the right half.
const META_LABEL_X: f32 = 120.0;
const META_VALUE_X: f32 = 152.0;

const TABLE_TOP: f32 = 218.0;
const ROW_HEIGHT: f32 = 6.5;

const LOGO_X: f32 = 165.0;
const LOGO_Y: f32 = 262.0;

struct Faces {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

pub(crate) fn render(plan: &InvoicePlan) -> Result<Vec<u8>, InvoicingError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(plan.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "invoice");
    let faces = Faces {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(InvoicingError::generation)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(InvoicingError::generation)?,
    };

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    draw_header(&layer, plan, &faces);

    let mut table_bottom = TABLE_TOP;
    let pages: Vec<&[TableRow]> = plan.row_pages().collect();
    for (index, rows) in pages.iter().enumerate() {
        if index > 0 {
            let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "invoice");
            layer = doc.get_page(page).get_layer(new_layer);
        }
        table_bottom = draw_table(&layer, rows, &faces);
    }

    draw_footer(&layer, plan, table_bottom, &faces);

    doc.save_to_bytes().map_err(InvoicingError::generation)
}

/// Organization block, logo, title line, party + metadata columns.
fn draw_header(layer: &PdfLayerReference, plan: &InvoicePlan, faces: &Faces) {
    if let Some(name) = &plan.org_name {
        layer.use_text(name.as_str(), 14.0, Mm(MARGIN_LEFT), Mm(275.0), &faces.bold);
    }
    if let Some(address) = &plan.org_address {
        layer.use_text(address.as_str(), 9.0, Mm(MARGIN_LEFT), Mm(269.0), &faces.regular);
    }
    if let Some(registration) = &plan.org_registration {
        let line = format!("Reg. No. {registration}");
        layer.use_text(line, 9.0, Mm(MARGIN_LEFT), Mm(264.5), &faces.regular);
    }
    if let Some(logo) = &plan.logo {
        embed_logo(layer, logo);
    }

    centered_text(layer, plan.title, 13.0, 252.0, &faces.bold);

    // Party column (left) and invoice metadata column (right).
    layer.use_text("Party", 8.0, Mm(MARGIN_LEFT), Mm(242.0), &faces.regular);
    layer.use_text(
        plan.counterparty_name.as_str(),
        11.0,
        Mm(MARGIN_LEFT),
        Mm(236.5),
        &faces.bold,
    );

    let metadata = [
        ("Invoice No.", plan.invoice_number.as_str()),
        ("Date", plan.date_text.as_str()),
        ("Payment Mode", plan.payment_mode),
    ];
    let mut y = 242.0;
    for (label, value) in metadata {
        layer.use_text(label, 9.0, Mm(META_LABEL_X), Mm(y), &faces.regular);
        layer.use_text(value, 9.0, Mm(META_VALUE_X), Mm(y), &faces.bold);
        y -= 5.5;
    }
}

/// Column headers plus one page's rows. Returns the baseline of the last row.
fn draw_table(layer: &PdfLayerReference, rows: &[TableRow], faces: &Faces) -> f32 {
    layer.set_outline_thickness(0.4);
    separator(layer, TABLE_TOP + 4.0);

    layer.use_text("S.N.", 9.0, Mm(COL_SN), Mm(TABLE_TOP), &faces.bold);
    layer.use_text("Name", 9.0, Mm(COL_NAME), Mm(TABLE_TOP), &faces.bold);
    right_text(layer, "Quantity", 9.0, COL_QTY_RIGHT, TABLE_TOP, &faces.bold);
    right_text(layer, "Rate", 9.0, COL_RATE_RIGHT, TABLE_TOP, &faces.bold);
    right_text(layer, "Amount", 9.0, COL_AMOUNT_RIGHT, TABLE_TOP, &faces.bold);
    separator(layer, TABLE_TOP - 2.5);

    let mut y = TABLE_TOP - ROW_HEIGHT;
    for row in rows {
        layer.use_text(row.serial.to_string(), 9.0, Mm(COL_SN), Mm(y), &faces.regular);
        layer.use_text(row.name.as_str(), 9.0, Mm(COL_NAME), Mm(y), &faces.regular);
        right_text(layer, &row.quantity.to_string(), 9.0, COL_QTY_RIGHT, y, &faces.regular);
        right_text(layer, &format_rupees(row.rate), 9.0, COL_RATE_RIGHT, y, &faces.regular);
        right_text(layer, &format_rupees(row.amount), 9.0, COL_AMOUNT_RIGHT, y, &faces.regular);
        y -= ROW_HEIGHT;
    }
    y + ROW_HEIGHT
}

/// Closing separator, amount-in-words sentence and the summary block.
fn draw_footer(layer: &PdfLayerReference, plan: &InvoicePlan, table_bottom: f32, faces: &Faces) {
    let rule_y = table_bottom - 3.5;
    separator(layer, rule_y);

    layer.use_text(
        plan.total_in_words.as_str(),
        9.0,
        Mm(MARGIN_LEFT),
        Mm(rule_y - 8.0),
        &faces.regular,
    );

    let mut y = rule_y - 8.0;
    let summary = [
        ("Subtotal", plan.subtotal, &faces.regular),
        ("Total", plan.total_amount, &faces.bold),
        ("Received", plan.received_amount, &faces.regular),
    ];
    for (label, amount, face) in summary {
        layer.use_text(label, 9.0, Mm(COL_RATE_RIGHT - 20.0), Mm(y), face);
        right_text(layer, &format_rupees(amount), 9.0, COL_AMOUNT_RIGHT, y, face);
        y -= 6.0;
    }
}

fn separator(layer: &PdfLayerReference, y: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT), Mm(y)), false),
            (Point::new(Mm(MARGIN_RIGHT), Mm(y)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

/// Right-align text at `right_edge`. Built-in fonts carry no metrics here, so
/// the width estimate uses the Helvetica average advance of ~0.5 em.
fn right_text(
    layer: &PdfLayerReference,
    text: &str,
    size: f32,
    right_edge: f32,
    y: f32,
    face: &IndirectFontRef,
) {
    layer.use_text(text, size, Mm(right_edge - text_width_mm(text, size)), Mm(y), face);
}

fn centered_text(layer: &PdfLayerReference, text: &str, size: f32, y: f32, face: &IndirectFontRef) {
    let x = (PAGE_WIDTH - text_width_mm(text, size)) / 2.0;
    layer.use_text(text, size, Mm(x), Mm(y), face);
}

fn text_width_mm(text: &str, size: f32) -> f32 {
    const PT_TO_MM: f32 = 0.352_778;
    text.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

/// Best-effort logo embedding: decode failures are logged and skipped so the
/// rest of the invoice still renders.
fn embed_logo(layer: &PdfLayerReference, logo: &Logo) {
    let image = match decode_logo(logo) {
        Ok(image) => image,
        Err(err) => {
            warn!(
                reference = %logo.reference,
                error = %err,
                "could not embed organization logo, rendering invoice without it"
            );
            return;
        }
    };

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(LOGO_X)),
            translate_y: Some(Mm(LOGO_Y)),
            dpi: Some(300.0),
            ..Default::default()
        },
    );
}

fn decode_logo(logo: &Logo) -> Result<Image, printpdf::image_crate::ImageError> {
    let cursor = Cursor::new(logo.bytes.as_slice());
    match logo.format() {
        LogoFormat::Png => Ok(Image::try_from(PngDecoder::new(cursor)?)?),
        LogoFormat::Jpeg => Ok(Image::try_from(JpegDecoder::new(cursor)?)?),
    }
}
