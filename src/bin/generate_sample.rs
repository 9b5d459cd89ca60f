use std::path::PathBuf;

use serde_json::{json, Value};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `[lo, hi)`, rounded to two decimals.
    fn range2(&mut self, lo: f64, hi: f64) -> f64 {
        ((lo + (hi - lo) * self.next_f64()) * 100.0).round() / 100.0
    }
}

/// (country, sector, cap, short_name, name_en, name_ta, isin, indices, market cap)
type BankSeed = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    f64,
);

const BANKS: &[BankSeed] = &[
    ("India", "Private", "Large", "HDFCBANK", "HDFC Bank Ltd", "எச்டிஎஃப்சி வங்கி", "INE040A01034", &["NIFTY50", "BANKNIFTY", "SENSEX"], 1_250_000.0),
    ("India", "Private", "Large", "ICICIBANK", "ICICI Bank Ltd", "ஐசிஐசிஐ வங்கி", "INE090A01021", &["NIFTY50", "BANKNIFTY", "SENSEX"], 880_000.0),
    ("India", "PSU", "Large", "SBIN", "State Bank of India", "பாரத ஸ்டேட் வங்கி", "INE062A01020", &["NIFTY50", "BANKNIFTY", "SENSEX"], 720_000.0),
    ("India", "PSU", "Mid", "BANKINDIA", "Bank of India", "பேங்க் ஆஃப் இந்தியா", "INE084A01016", &["NIFTYPSUBANK"], 55_000.0),
    ("India", "Private", "Mid", "IDFCFIRSTB", "IDFC First Bank", "ஐடிஎஃப்சி ஃபர்ஸ்ட் வங்கி", "INE092T01019", &["BANKNIFTY"], 52_000.0),
    ("India", "Private", "Small", "KARURVYSYA", "Karur Vysya Bank", "கரூர் வைஸ்யா வங்கி", "INE036D01028", &[], 16_000.0),
    ("India", "Small Finance", "Small", "UJJIVANSFB", "Ujjivan Small Finance Bank", "உஜ்ஜீவன் சிறு நிதி வங்கி", "INE551W01018", &[], 9_000.0),
    ("USA", "Commercial", "Large", "JPM", "JPMorgan Chase & Co", "ஜேபி மோர்கன் சேஸ்", "US46625H1005", &["SPX", "DJIA"], 560.0),
    ("USA", "Commercial", "Large", "BAC", "Bank of America", "பேங்க் ஆஃப் அமெரிக்கா", "US0605051046", &["SPX"], 300.0),
    ("USA", "Regional", "Mid", "USB", "U.S. Bancorp", "யுஎஸ் பான்கார்ப்", "US9029733048", &["SPX"], 65.0),
    ("USA", "Regional", "Small", "ZION", "Zions Bancorporation", "சியான்ஸ் பான்கார்ப்பரேஷன்", "US9897011071", &["KBW"], 7.5),
];

fn labels() -> Value {
    json!({
        "English": {
            "title": "Bank Beta Dashboard",
            "graph_title": "5-Year Beta vs Market Cap",
            "table_title": "Bank Details",
            "beta_label": "5Y Beta",
            "marketcap_label": "Market Cap",
            "fullname_label": "Full Name",
            "capseg_label": "Cap Segment",
            "indices_label": "Indices",
            "isin_label": "ISIN",
            "export_excel": "📥 Download Excel",
            "filter_by_sector": "🏢 Filter by Sector",
            "sector_labels": {
                "Private": "Private",
                "PSU": "Public Sector",
                "Commercial": "Commercial",
                "Regional": "Regional"
            },
            "index_labels": {
                "NIFTY50": "Nifty 50",
                "BANKNIFTY": "Nifty Bank",
                "SENSEX": "BSE Sensex",
                "NIFTYPSUBANK": "Nifty PSU Bank",
                "SPX": "S&P 500",
                "DJIA": "Dow Jones",
                "KBW": "KBW Bank Index"
            }
        },
        "Tamil": {
            "title": "வங்கி பீட்டா டாஷ்போர்டு",
            "graph_title": "5 ஆண்டு பீட்டா மற்றும் சந்தை மதிப்பு",
            "table_title": "வங்கி விவரங்கள்",
            "beta_label": "5 ஆண்டு பீட்டா",
            "marketcap_label": "சந்தை மதிப்பு",
            "fullname_label": "முழு பெயர்",
            "capseg_label": "மூலதனப் பிரிவு",
            "indices_label": "குறியீடுகள்",
            "isin_label": "ISIN",
            "export_excel": "📥 எக்செல் பதிவிறக்கம்",
            "filter_by_sector": "🏢 துறை வாரியாக வடிகட்டு",
            "sector_labels": {
                "Private": "தனியார்",
                "PSU": "பொதுத்துறை",
                "Commercial": "வணிக வங்கி",
                "Regional": "பிராந்திய வங்கி"
            },
            "index_labels": {
                "NIFTY50": "நிஃப்டி 50",
                "BANKNIFTY": "நிஃப்டி வங்கி",
                "SENSEX": "சென்செக்ஸ்",
                "SPX": "எஸ்&பி 500"
            }
        }
    })
}

fn index_metadata() -> Value {
    json!({
        "NIFTY50": { "provider": "NSE", "constituents": 50 },
        "BANKNIFTY": { "provider": "NSE", "constituents": 12 },
        "SENSEX": { "provider": "BSE", "constituents": 30 },
        "NIFTYPSUBANK": { "provider": "NSE", "constituents": 12 },
        "SPX": { "provider": "S&P Dow Jones", "constituents": 500 },
        "DJIA": { "provider": "S&P Dow Jones", "constituents": 30 },
        "KBW": { "provider": "Nasdaq", "constituents": 24 }
    })
}

fn banks(rng: &mut SimpleRng) -> Value {
    let mut rows: Vec<Value> = BANKS
        .iter()
        .map(|&(country, sector, cap, short, en, ta, isin, indices, mcap)| {
            let (cr, bn) = if country == "India" {
                (json!(mcap), json!((mcap / 8_350.0 * 100.0).round() / 100.0))
            } else {
                (Value::Null, json!(mcap))
            };
            json!({
                "country": country,
                "sector": sector,
                "cap_segment": cap,
                "short_name": short,
                "full_name_en": en,
                "full_name_ta": ta,
                "isin": isin,
                "indices": indices,
                "beta_5yr": rng.range2(0.6, 1.6),
                "market_cap_cr": cr,
                "market_cap_bn_usd": bn
            })
        })
        .collect();

    // One row with a broken index list, rendered as a dash.
    if let Some(row) = rows.iter_mut().find(|r| r["short_name"] == "IDFCFIRSTB") {
        row["indices"] = json!("BANKNIFTY");
    }

    json!({ "banks_data": rows })
}

fn main() -> std::io::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let mut rng = SimpleRng::new(42);
    let files = [
        ("labels.json", labels()),
        ("index_metadata.json", index_metadata()),
        ("banks-master.json", banks(&mut rng)),
    ];

    for (name, value) in &files {
        let path = out_dir.join(name);
        let text = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, text)?;
        println!("Wrote {}", path.display());
    }

    println!("{} banks across India and USA", BANKS.len());
    Ok(())
}
