use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use sumario::domain::{DOCX_MIME, DataUrlError, PDF_MIME, parse_data_url};

#[test]
fn given_pdf_data_url_when_parsing_then_returns_bytes_and_declared_type() {
    let url = format!("data:application/pdf;base64,{}", STANDARD.encode(b"%PDF-1.7"));

    let decoded = parse_data_url(&url).unwrap();

    assert_eq!(decoded.bytes, b"%PDF-1.7");
    assert_eq!(decoded.mime_type_guess.as_deref(), Some(PDF_MIME));
}

#[test]
fn given_data_url_with_extra_parameters_when_parsing_then_parameters_are_ignored() {
    let url = format!(
        "data:{DOCX_MIME};name=informe.docx;base64,{}",
        STANDARD.encode(b"PK\x03\x04")
    );

    let decoded = parse_data_url(&url).unwrap();

    assert_eq!(decoded.mime_type_guess.as_deref(), Some(DOCX_MIME));
}

#[test]
fn given_data_url_without_type_when_parsing_then_type_is_sniffed() {
    let url = format!("data:;base64,{}", STANDARD.encode(b"%PDF-1.4 body"));

    let decoded = parse_data_url(&url).unwrap();

    assert_eq!(decoded.mime_type_guess.as_deref(), Some(PDF_MIME));
}

#[test]
fn given_wrapped_base64_payload_when_parsing_then_whitespace_is_ignored() {
    let encoded = STANDARD.encode(b"contenido del documento");
    let (head, tail) = encoded.split_at(8);
    let url = format!("data:application/pdf;base64,{head}\n  {tail}");

    let decoded = parse_data_url(&url).unwrap();

    assert_eq!(decoded.bytes, b"contenido del documento");
}

#[test]
fn given_plain_string_when_parsing_then_missing_scheme() {
    assert_eq!(
        parse_data_url("application/pdf;base64,AAAA"),
        Err(DataUrlError::MissingScheme)
    );
}

#[test]
fn given_data_url_without_comma_when_parsing_then_missing_separator() {
    assert_eq!(
        parse_data_url("data:application/pdf;base64"),
        Err(DataUrlError::MissingSeparator)
    );
}

#[test]
fn given_percent_encoded_data_url_when_parsing_then_not_base64() {
    assert_eq!(
        parse_data_url("data:text/plain,hola%20mundo"),
        Err(DataUrlError::NotBase64)
    );
}

#[test]
fn given_corrupt_base64_when_parsing_then_invalid_payload() {
    assert!(matches!(
        parse_data_url("data:application/pdf;base64,%%%"),
        Err(DataUrlError::InvalidPayload(_))
    ));
}
