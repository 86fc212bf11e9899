//! The eight business questions answered from the metrics engine.
//!
//! Numbers are only formatted here, never recomputed.

use std::fmt::Write as _;

use serde::Serialize;

use sales_metrics::{MetricsEngine, MonthlyTotal, RankedTotal, SalesMetrics};

use crate::format::{format_currency, format_percent};

const NOT_AVAILABLE: &str = "n/a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Scalar(String),
    /// Ordered label/value pairs.
    Breakdown(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessAnswer {
    pub number: usize,
    pub question: String,
    pub answer: Answer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Customers listed under question 5.
    pub top_customers: usize,
    /// Categories kept in the report's ranked category list.
    pub top_categories: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_customers: 10,
            top_categories: 5,
        }
    }
}

/// Formatted answers plus the raw figures they were built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessReport {
    pub answers: Vec<BusinessAnswer>,
    pub metrics: SalesMetrics,
    pub top_categories: Vec<RankedTotal>,
    pub top_customers: Vec<RankedTotal>,
    pub monthly_trend: Vec<MonthlyTotal>,
}

fn currency_breakdown(totals: &[RankedTotal]) -> Answer {
    Answer::Breakdown(
        totals
            .iter()
            .map(|total| (total.key.clone(), format_currency(total.total)))
            .collect(),
    )
}

impl BusinessReport {
    pub fn build(engine: &MetricsEngine<'_>, options: &ReportOptions) -> Self {
        let metrics = engine.summary();
        let top_categories = engine.top_categories(options.top_categories);
        let top_customers = engine.top_customers(options.top_customers);
        let monthly_trend = engine.monthly_trend();
        let most_profitable = engine
            .top_categories(1)
            .into_iter()
            .next()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |top| top.key);

        let trend = Answer::Breakdown(
            monthly_trend
                .iter()
                .map(|month| (month.month.to_string(), format_currency(month.total)))
                .collect(),
        );
        let answers = [
            (
                "Total Revenue".to_string(),
                Answer::Scalar(format_currency(metrics.total_revenue)),
            ),
            (
                "Average Order Value".to_string(),
                Answer::Scalar(format_currency(metrics.avg_order_value)),
            ),
            (
                "Customer Count".to_string(),
                Answer::Scalar(metrics.customer_count.to_string()),
            ),
            (
                "Most Profitable Category".to_string(),
                Answer::Scalar(most_profitable),
            ),
            (
                format!("Top {} Customers", options.top_customers),
                currency_breakdown(&top_customers),
            ),
            (
                "Repeat Customer Rate".to_string(),
                Answer::Scalar(format_percent(metrics.repeat_customer_rate)),
            ),
            ("Monthly Sales Trends".to_string(), trend),
            (
                "Cancellation Rate".to_string(),
                Answer::Scalar(format_percent(metrics.cancellation_rate)),
            ),
        ]
        .into_iter()
        .enumerate()
        .map(|(idx, (question, answer))| BusinessAnswer {
            number: idx + 1,
            question,
            answer,
        })
        .collect();

        Self {
            answers,
            metrics,
            top_categories,
            top_customers,
            monthly_trend,
        }
    }

    pub fn answer(&self, number: usize) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|answer| answer.number == number)
            .map(|answer| &answer.answer)
    }

    /// Plain-text rendering: scalars on one line, breakdowns as an
    /// indented list under their question.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for answer in &self.answers {
            match &answer.answer {
                Answer::Scalar(value) => {
                    let _ = writeln!(out, "{}. {}: {value}", answer.number, answer.question);
                }
                Answer::Breakdown(rows) => {
                    let _ = writeln!(out, "{}. {}:", answer.number, answer.question);
                    for (label, value) in rows {
                        let _ = writeln!(out, "  {label}: {value}");
                    }
                }
            }
        }
        out
    }
}
