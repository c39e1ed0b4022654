pub mod u501_extract_document;
pub mod u502_generate_bill;
pub mod u503_generate_invoice;
