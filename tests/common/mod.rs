use trade_journal::journal::{normalize_all, TradeRecord};
use trade_journal::models::Trade;

/// Ten journal rows as the API serves them: decimals as strings, serial ids,
/// one unfilled order and one row with no P&L yet.
pub const JOURNAL_JSON: &str = r#"[
  {"id": 1, "date": "2024-12-07", "time": "09:30", "exitDate": "2024-12-07", "exitTime": "11:30",
   "pair": "EURUSD", "direction": "long", "target": "1.75000", "stopLoss": "0.50000",
   "result": "target", "pnl": "175.00", "emotion": "Confident",
   "confluencesPro": ["Strong trend", "Tested support"], "confluencesContro": ["News ahead"],
   "imageUrls": [], "notes": ""},
  {"id": 2, "date": "2024-12-08", "time": "14:15", "pair": "GBPUSD", "direction": "short",
   "target": "1.50000", "stopLoss": "0.75000", "result": "stop_loss", "pnl": "-75.00",
   "emotion": "FOMO", "confluencesPro": ["Clear pattern"],
   "confluencesContro": ["Counter trend", "Low liquidity"]},
  {"id": 3, "date": "2024-12-09", "time": "10:00", "pair": "USDJPY", "direction": "long",
   "result": "breakeven", "pnl": "0.00", "emotion": "Neutral",
   "confluencesPro": ["High volume", "Key level"], "confluencesContro": []},
  {"id": 4, "date": "2024-12-10", "time": "16:45", "pair": "EURUSD", "direction": "short",
   "result": "target", "pnl": "125.00", "emotion": "Sure",
   "confluencesPro": ["Strong trend", "Clear pattern", "High volume"],
   "confluencesContro": ["Bad hour"]},
  {"id": 5, "date": "2024-12-11", "time": "11:20", "exitDate": "2024-12-11", "exitTime": "15:20",
   "pair": "XAUUSD", "direction": "long", "result": "target", "pnl": "300.00",
   "emotion": "Confident", "confluencesPro": ["Strong trend", "Key level"]},
  {"id": 6, "date": "2024-12-11", "time": "15:30", "pair": "GBPJPY", "direction": "short",
   "result": "parziale", "pnl": "125.00", "emotion": "Neutral",
   "confluencesPro": ["Clear pattern", "High volume"], "confluencesContro": ["Bad hour"]},
  {"id": 7, "date": "2024-12-12", "time": "09:00", "pair": "USDCAD", "direction": "long",
   "result": "stop_loss", "pnl": "-50.00", "emotion": "Impatient",
   "confluencesPro": ["Tested support"], "confluencesContro": ["News ahead", "Weak pattern"]},
  {"id": 8, "date": "2024-12-12", "time": "14:00", "pair": "EURUSD", "direction": "long",
   "result": "target", "pnl": "175.00", "emotion": "Sure",
   "confluencesPro": ["Strong trend", "High volume", "Key level"]},
  {"id": 9, "date": "2024-12-13", "time": "08:30", "pair": "GBPUSD", "direction": "short",
   "result": "non_fillato", "pnl": null, "emotion": "Neutral",
   "confluencesPro": ["Clear pattern", "Strong trend"]},
  {"id": 10, "date": "2024-12-13", "time": "11:45", "pair": "USDJPY", "direction": "long",
   "result": "parziale", "pnl": 90, "emotion": "Confident",
   "confluencesPro": ["Key level", "High volume"], "confluencesContro": ["Bad hour"]}
]"#;

pub fn journal_trades() -> Vec<Trade> {
    let records: Vec<TradeRecord> = serde_json::from_str(JOURNAL_JSON).unwrap();
    normalize_all(&records)
}
