use crate::domain::reservation::Reservation;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use rust_xlsxwriter::Workbook;

// Legacy column set of reservations.xlsx, kept verbatim so the download
// stays compatible with the owner's existing spreadsheets.
const HEADERS: [&str; 12] = [
    "nom_client",
    "plateforme",
    "telephone",
    "date_arrivee",
    "date_depart",
    "prix_brut",
    "prix_net",
    "charges",
    "%",
    "nuitees",
    "annee",
    "mois",
];

pub fn export_reservations_xlsx(rows: &[Reservation]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, r) in rows.iter().enumerate() {
        let row = (i + 1) as u32;

        worksheet
            .write_string(row, 0, &r.client_name)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write client name: {e}")))?;

        worksheet
            .write_string(row, 1, r.platform.label())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write platform: {e}")))?;

        worksheet
            .write_string(row, 2, &r.phone)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write phone: {e}")))?;

        worksheet
            .write_string(row, 3, r.arrival_date.format("%Y-%m-%d").to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write arrival date: {e}")))?;

        worksheet
            .write_string(row, 4, r.departure_date.format("%Y-%m-%d").to_string())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write departure date: {e}")))?;

        worksheet
            .write_number(row, 5, r.gross_price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write gross price: {e}")))?;

        worksheet
            .write_number(row, 6, r.net_price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write net price: {e}")))?;

        worksheet
            .write_number(row, 7, r.charges)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write charges: {e}")))?;

        worksheet
            .write_number(row, 8, r.margin_pct)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write margin: {e}")))?;

        worksheet
            .write_number(row, 9, r.nights as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write nights: {e}")))?;

        worksheet
            .write_number(row, 10, r.year as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write year: {e}")))?;

        worksheet
            .write_number(row, 11, r.month as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write month: {e}")))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, "reservations.xlsx")
}
