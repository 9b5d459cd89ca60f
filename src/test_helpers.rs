//! Shared fixtures for unit tests.

use std::path::Path;

use serde_json::{json, Value};

use crate::config::{BANKS_FILE, INDEX_METADATA_FILE, LABELS_FILE};
use crate::data::loader::DashboardData;
use crate::data::model::{BankRecord, BanksFile, CapSegment, Indices, RecordStore};
use crate::labels::LabelConfig;

/// A minimal record; tests override whatever they care about.
pub fn bank(country: &str, sector: &str, cap: CapSegment, short_name: &str) -> BankRecord {
    BankRecord {
        country: country.to_string(),
        sector: sector.to_string(),
        cap_segment: cap,
        short_name: short_name.to_string(),
        full_name_en: format!("{short_name} Ltd"),
        full_name_ta: format!("{short_name} லிமிடெட்"),
        isin: format!("XX{short_name}"),
        indices: Indices::List(vec!["NIFTY50".to_string()]),
        beta_5yr: 1.0,
        market_cap_cr: Some(1000.0),
        market_cap_bn_usd: Some(1.0),
    }
}

pub fn labels_json() -> Value {
    json!({
        "English": {
            "title": "Bank Beta Dashboard",
            "graph_title": "Beta vs Market Cap",
            "table_title": "Bank Details",
            "beta_label": "5Y Beta",
            "marketcap_label": "Market Cap",
            "fullname_label": "Full Name",
            "capseg_label": "Cap Segment",
            "export_excel": "Export to Excel",
            "filter_by_sector": "Filter by Sector",
            "sector_labels": { "Private": "Private Sector", "PSU": "Public Sector" },
            "index_labels": { "NIFTY50": "Nifty 50", "BANKNIFTY": "Bank Nifty" }
        },
        "Tamil": {
            "title": "வங்கி பீட்டா டாஷ்போர்டு",
            "graph_title": "பீட்டா மற்றும் சந்தை மதிப்பு",
            "table_title": "வங்கி விவரங்கள்",
            "beta_label": "5 ஆண்டு பீட்டா",
            "marketcap_label": "சந்தை மதிப்பு",
            "fullname_label": "முழு பெயர்",
            "capseg_label": "மூலதனப் பிரிவு",
            "indices_label": "குறியீடுகள்",
            "export_excel": "எக்செல் பதிவிறக்கம்",
            "filter_by_sector": "துறை வாரியாக வடிகட்டு",
            "sector_labels": { "Private": "தனியார்", "PSU": "பொதுத்துறை" },
            "index_labels": { "NIFTY50": "நிஃப்டி 50", "BANKNIFTY": "பேங்க் நிஃப்டி" }
        }
    })
}

pub fn banks_json() -> Value {
    json!({
        "banks_data": [
            {
                "country": "India", "sector": "Private", "cap_segment": "Large",
                "short_name": "HDFCBANK",
                "full_name_en": "HDFC Bank Ltd", "full_name_ta": "எச்டிஎஃப்சி வங்கி",
                "isin": "INE040A01034", "indices": ["NIFTY50", "BANKNIFTY"],
                "beta_5yr": 0.92, "market_cap_cr": 1250000.0, "market_cap_bn_usd": 150.0
            },
            {
                "country": "India", "sector": "PSU", "cap_segment": "Large",
                "short_name": "SBIN",
                "full_name_en": "State Bank of India", "full_name_ta": "பாரத ஸ்டேட் வங்கி",
                "isin": "INE062A01020", "indices": ["NIFTY50"],
                "beta_5yr": 1.35, "market_cap_cr": 720000.0
            },
            {
                "country": "India", "sector": "Private", "cap_segment": "Mid",
                "short_name": "IDFCFIRSTB",
                "full_name_en": "IDFC First Bank", "full_name_ta": "ஐடிஎஃப்சி ஃபர்ஸ்ட் வங்கி",
                "isin": "INE092T01019", "indices": "NIFTY_MIDCAP",
                "beta_5yr": 1.18
            },
            {
                "country": "USA", "sector": "Commercial", "cap_segment": "Large",
                "short_name": "JPM",
                "full_name_en": "JPMorgan Chase & Co", "full_name_ta": "ஜேபி மோர்கன் சேஸ்",
                "isin": "US46625H1005", "indices": ["SPX", "DJIA"],
                "beta_5yr": 1.1, "market_cap_bn_usd": 560.0
            },
            {
                "country": "USA", "sector": "Regional", "cap_segment": "Mid",
                "short_name": "USB",
                "full_name_en": "U.S. Bancorp", "full_name_ta": "யுஎஸ் பான்கார்ப்",
                "isin": "US9029733048", "indices": [],
                "beta_5yr": 1.02, "market_cap_bn_usd": 65.0
            }
        ]
    })
}

pub fn index_metadata_json() -> Value {
    json!({
        "NIFTY50": { "provider": "NSE", "constituents": 50 },
        "SPX": { "provider": "S&P", "constituents": 500 }
    })
}

pub fn sample_labels() -> LabelConfig {
    serde_json::from_value(labels_json()).unwrap()
}

pub fn sample_store() -> RecordStore {
    let file: BanksFile = serde_json::from_value(banks_json()).unwrap();
    RecordStore::new(file.banks_data)
}

pub fn sample_data() -> DashboardData {
    DashboardData {
        store: sample_store(),
        labels: sample_labels(),
        index_metadata: index_metadata_json(),
    }
}

/// Write the fixture as the three input files inside `dir`.
pub fn write_sample_files(dir: &Path) {
    let write = |name: &str, value: Value| {
        std::fs::write(dir.join(name), serde_json::to_string_pretty(&value).unwrap()).unwrap();
    };
    write(LABELS_FILE, labels_json());
    write(INDEX_METADATA_FILE, index_metadata_json());
    write(BANKS_FILE, banks_json());
}

/// A two-glyph TrueType font that maps the whole Tamil block (U+0B80..=U+0BFF)
/// to one box-shaped glyph.
pub fn tamil_test_font() -> Vec<u8> {
    fn words(values: &[u16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_be_bytes()).collect()
    }
    const NEG_200: u16 = -200i16 as u16;
    const NEG_400: u16 = -400i16 as u16;

    // glyph 1: one contour, bbox, end point, no instructions, four on-curve points
    let mut glyf = words(&[1, 100, 0, 500, 700, 3, 0]);
    glyf.extend([0x01; 4]);
    glyf.extend(words(&[100, 400, 0, NEG_400]));
    glyf.extend(words(&[0, 0, 700, 0]));
    glyf.extend([0, 0]);
    // glyph 0 is empty, glyph 1 spans 36 bytes (short offsets are halved)
    let loca = words(&[0, 0, 18]);

    let mut head = words(&[1, 0, 1, 0, 0, 0, 0x5F0F, 0x3CF5, 0, 1000]);
    head.extend([0; 16]);
    head.extend(words(&[0, 0, 500, 700, 0, 8, 2, 0, 0]));

    let hhea = words(&[1, 0, 800, NEG_200, 0, 600, 0, 0, 500, 1, 0, 0, 0, 0, 0, 0, 0, 2]);
    let hmtx = words(&[600, 0, 600, 100]);
    let maxp = words(&[0x0000, 0x5000, 2]);

    // Windows Unicode BMP subtable, format 4: the Tamil segment reads every
    // code point's glyph from a 128-entry array of ones, then the 0xFFFF sentinel
    let mut cmap = words(&[0, 1, 3, 1, 0, 12]);
    cmap.extend(words(&[
        4, 32 + 2 * 128, 0, 4, 4, 1, 0,
        0x0BFF, 0xFFFF, 0,
        0x0B80, 0xFFFF,
        0, 1,
        4, 0,
    ]));
    cmap.extend(words(&[1; 128]));

    let tables: [(&[u8; 4], Vec<u8>); 7] = [
        (b"cmap", cmap),
        (b"glyf", glyf),
        (b"head", head),
        (b"hhea", hhea),
        (b"hmtx", hmtx),
        (b"loca", loca),
        (b"maxp", maxp),
    ];

    let header_len = 12 + 16 * tables.len();
    let mut font = words(&[1, 0, tables.len() as u16, 64, 2, 48]);
    let mut body = Vec::new();
    for (tag, data) in &tables {
        let offset = (header_len + body.len()) as u32;
        font.extend_from_slice(*tag);
        font.extend(0u32.to_be_bytes());
        font.extend(offset.to_be_bytes());
        font.extend((data.len() as u32).to_be_bytes());
        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
    }
    font.extend(body);
    font
}
