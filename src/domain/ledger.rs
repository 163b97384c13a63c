use super::{Cents, Entry};

/// Compute the net balance from a sequence of raw ledger lines.
/// Balance = sum of credit amounts - sum of debit amounts.
///
/// Lines that fail to parse are skipped and logged, never fatal: a
/// hand-edited data file must not brick the whole ledger.
pub fn compute_balance(lines: &[String]) -> Cents {
    lines.iter().enumerate().fold(0, |balance, (idx, line)| {
        match Entry::parse(line) {
            Ok(entry) => balance + entry.signed_cents(),
            Err(err) => {
                tracing::warn!(line = idx + 1, %err, "skipping malformed ledger line");
                balance
            }
        }
    })
}

/// The in-memory ordered sequence of ledger lines for a session.
///
/// Raw lines are kept as stored so that unparseable lines survive a
/// load/save cycle untouched. Persistence is the caller's job: `append`
/// and `clear` mutate memory only.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    lines: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add an entry to the in-memory sequence. No persistence happens here.
    pub fn append(&mut self, entry: Entry) {
        self.lines.push(entry.to_line());
    }

    /// Empty the in-memory sequence. No persistence happens here.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn balance(&self) -> Cents {
        compute_balance(&self.lines)
    }

    /// Parse every line, skipping malformed ones under the same policy as
    /// `compute_balance`.
    pub fn entries(&self) -> Vec<Entry> {
        self.lines
            .iter()
            .filter_map(|line| Entry::parse(line).ok())
            .collect()
    }

    /// Numbered human-readable history lines, e.g. `1. Income: +100.00 (salary)`.
    /// Numbers follow the raw line position, so a skipped malformed line
    /// leaves a gap rather than shifting every label below it.
    pub fn history(&self) -> Vec<String> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                Entry::parse(line)
                    .ok()
                    .map(|entry| format!("{}. {}", idx + 1, entry.describe()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compute_balance_empty() {
        assert_eq!(compute_balance(&[]), 0);
    }

    #[test]
    fn test_compute_balance_mixed() {
        let lines = lines(&["+100.00|a", "-40.00|b"]);
        assert_eq!(compute_balance(&lines), 6000);
    }

    #[test]
    fn test_compute_balance_skips_malformed() {
        let lines = lines(&["+50|a", "garbage-line", "-20|b"]);
        assert_eq!(compute_balance(&lines), 3000);
    }

    #[test]
    fn test_compute_balance_all_malformed() {
        let lines = lines(&["", "not a line", "100|no sign"]);
        assert_eq!(compute_balance(&lines), 0);
    }

    #[test]
    fn test_ledger_append_and_balance() {
        let mut ledger = Ledger::new();
        ledger.append(Entry::credit(10000, "salary"));
        ledger.append(Entry::debit(2500, "groceries"));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.balance(), 7500);
        assert_eq!(ledger.lines()[0], "+100.00|salary");
    }

    #[test]
    fn test_ledger_clear() {
        let mut ledger = Ledger::from_lines(vec!["+1.00|x".to_string()]);
        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn test_history_numbering() {
        let mut ledger = Ledger::new();
        ledger.append(Entry::credit(10000, "salary"));
        ledger.append(Entry::debit(4000, "rent"));

        assert_eq!(
            ledger.history(),
            vec![
                "1. Income: +100.00 (salary)".to_string(),
                "2. Expense: -40.00 (rent)".to_string(),
            ]
        );
    }

    #[test]
    fn test_history_skips_malformed_keeping_raw_positions() {
        let ledger = Ledger::from_lines(lines(&["+1.00|a", "junk", "-2.00|b"]));
        let history = ledger.history();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0], "1. Income: +1.00 (a)");
        assert_eq!(history[1], "3. Expense: -2.00 (b)");
    }

    #[test]
    fn test_compute_balance_skips_multibyte_amount_without_panicking() {
        let lines = lines(&["+1.€0|x", "+2.00|ok"]);
        assert_eq!(compute_balance(&lines), 200);
    }

    #[test]
    fn test_compute_balance_skips_overflowing_amount_without_panicking() {
        let lines = lines(&["+92233720368547759|huge", "-1.00|ok"]);
        assert_eq!(compute_balance(&lines), -100);
    }

    #[test]
    fn test_malformed_lines_survive_untouched() {
        let raw = lines(&["+1.00|a", "junk"]);
        let ledger = Ledger::from_lines(raw.clone());
        assert_eq!(ledger.lines(), raw.as_slice());
    }
}
