//! Line-oriented terminal adapter for the display port.

use std::fmt::Display;
use std::io::Write;

use colored::{ColoredString, Colorize};
use phishscan_core::{
    DisplayFacts, DisplayPort, FactRow, NotificationId, NotificationView, Readiness,
    RiskSeverity, Verdict,
};
use scan_logging::{scan_trace, scan_warn};

const BAR_WIDTH: usize = 30;

pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            scan_warn!("Failed to write to terminal: {}", err);
        }
    }

    fn rows(&mut self, rows: &[FactRow]) {
        for row in rows {
            let value = if row.highlight {
                format!("{} !", row.value).red().bold()
            } else {
                row.value.normal()
            };
            self.line(format!("  {:<18} {}", row.label, value));
        }
    }
}

impl<W: Write> DisplayPort for TerminalDisplay<W> {
    fn show_readiness(&mut self, readiness: Readiness, model_type: Option<&str>) {
        let dot = match readiness {
            Readiness::Ready => "●".green(),
            Readiness::Checking => "●".yellow(),
            Readiness::ModelNotLoaded | Readiness::Offline => "●".red(),
        };
        match model_type {
            Some(model) if readiness.is_ready() => {
                self.line(format!("{dot} {} ({model})", readiness.label()))
            }
            _ => self.line(format!("{dot} {}", readiness.label())),
        }
    }

    fn show_input(&mut self, enabled: bool, text: &str) {
        if !enabled {
            return;
        }
        if text.is_empty() {
            self.line("Enter a URL to scan (:q to quit):");
        } else {
            self.line(format!("Enter a URL to scan (:q to quit), last input: {text}"));
        }
    }

    fn show_scanning(&mut self, url: &str) {
        self.line(format!("Scanning {url} ...").dimmed());
    }

    fn show_result(&mut self, facts: &DisplayFacts) {
        let title: ColoredString = match facts.verdict {
            Verdict::Phishing => format!("⚠ {}", facts.title).red().bold(),
            Verdict::Safe => format!("✔ {}", facts.title).green().bold(),
        };
        self.line("");
        self.line(title);
        self.line(format!("  {:<18} {}", "Classification", facts.classification_label));
        self.line(format!("  {:<18} {}", "URL", facts.url));
        self.line(format!(
            "  {:<18} {} {}",
            "Confidence",
            confidence_bar(facts.confidence_fill()),
            facts.confidence_text
        ));
        self.line(format!(
            "  {:<18} legitimate {} / phishing {}",
            "", facts.legitimate_text, facts.phishing_text
        ));
        self.line(format!(
            "  {:<18} {}",
            "Risk Level",
            severity_colour(facts.risk_severity, &facts.risk_label)
        ));

        if let Some(features) = facts.features.as_deref() {
            self.line("URL features".bold());
            self.rows(features);
        }

        if let Some(network) = facts.network.as_ref() {
            self.line("Network analysis".bold());
            self.rows(&network.rows);
            if let Some(reasons) = network.risk_factors.as_deref() {
                self.line(format!("  {:<18} {}", "Risk Factors", reasons.red()));
            }
        }

        if let Some(model) = facts.model_type.as_deref() {
            self.line(format!("  model: {model}").dimmed());
        }
        self.line("Type :r to scan another URL.");
    }

    fn clear_result(&mut self) {
        self.line("─".repeat(BAR_WIDTH + 20).dimmed());
    }

    fn show_notification(&mut self, notification: &NotificationView) {
        self.line(format!("✖ {}", notification.message).red());
    }

    fn begin_notification_exit(&mut self, id: NotificationId) {
        scan_trace!("Notification {} fading out", id);
    }

    fn remove_notification(&mut self, id: NotificationId) {
        scan_trace!("Notification {} removed", id);
    }
}

fn confidence_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

fn severity_colour(severity: RiskSeverity, label: &str) -> ColoredString {
    match severity {
        RiskSeverity::Safe | RiskSeverity::Low => label.green(),
        RiskSeverity::Medium => label.yellow(),
        RiskSeverity::High => label.red().bold(),
        RiskSeverity::Other => label.normal(),
    }
}
