use crate::domain::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::sync::Arc;

const HEADERS: [&str; 10] = [
    "Id",
    "Title",
    "Category",
    "Location",
    "Price (Rs.)",
    "Rating",
    "Popularity",
    "In Stock",
    "Organic",
    "Verified",
];

/// Builds the workbook for a filtered, sorted listing sequence.
pub fn listings_workbook(listings: &[Arc<Listing>]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
        })?;
    }

    for (i, listing) in listings.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, listing).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write listing {}: {}", listing.id, e))
        })?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

fn write_row(worksheet: &mut Worksheet, r: u32, listing: &Listing) -> Result<(), XlsxError> {
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };

    worksheet.write_number(r, 0, listing.id as f64)?;
    worksheet.write_string(r, 1, listing.headline())?;
    worksheet.write_string(r, 2, listing.category.as_str())?;
    worksheet.write_string(r, 3, &listing.location)?;

    // Unpriced listings keep their label so the row still says something.
    match listing.price {
        Some(price) => worksheet.write_number(r, 4, price as f64)?,
        None => worksheet.write_string(r, 4, &listing.price_label)?,
    };

    worksheet.write_number(r, 5, listing.rating)?;
    worksheet.write_number(r, 6, listing.popularity as f64)?;
    worksheet.write_string(r, 7, yes_no(listing.in_stock))?;
    worksheet.write_string(r, 8, yes_no(listing.organic))?;
    worksheet.write_string(r, 9, yes_no(listing.producer_verified))?;

    Ok(())
}

pub fn export_listings_xlsx(listings: &[Arc<Listing>], filename: &str) -> ResultResp {
    let buffer = listings_workbook(listings)?;
    xlsx_response(buffer, filename)
}
