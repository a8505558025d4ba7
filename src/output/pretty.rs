use colored::Colorize;

use chrono::TimeZone;

use crate::core::{ActionKind, ParsedCommand, ResolvedAction, Token, TokenKind};

/// Format an analyzed command for humans.
pub fn format_analysis_pretty<Tz>(command: &ParsedCommand, action: &ResolvedAction<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let icon = match action.kind {
        ActionKind::Event => "📅",
        ActionKind::Reminder => "📌",
    };
    let kind_label = match action.kind {
        ActionKind::Event => "evento",
        ActionKind::Reminder => "recordatorio",
    };

    let mut output = format!("{icon} {}\n", action.description.bold());
    output.push_str(&format!("  {}: {}\n", "Tipo".dimmed(), kind_label));
    output.push_str(&format!("  {}: {}\n", "Verbo".dimmed(), command.verb));

    if let Some(date) = &command.date {
        output.push_str(&format!("  {}: {}\n", "Fecha".dimmed(), date));
    }
    if let Some(time) = &command.time {
        output.push_str(&format!("  {}: {}\n", "Hora".dimmed(), time));
    }

    let timestamp = action.timestamp.format("%Y-%m-%d %H:%M %:z").to_string();
    output.push_str(&format!(
        "  {}: {}\n",
        "Resuelto".dimmed(),
        timestamp.yellow()
    ));

    if !action.has_explicit_time {
        output.push_str(&format!("  {}\n", "(sin hora explícita)".dimmed()));
    }

    output
}

/// Format a token stream for humans, one token per line.
pub fn format_tokens_pretty(tokens: &[Token]) -> String {
    let mut output = format!("{} tokens\n", tokens.len());

    for token in tokens {
        let kind = format!("{:?}", token.kind);
        let line = if token.kind == TokenKind::Illegal {
            format!("  {:<14} {}\n", kind.red(), token.text)
        } else {
            format!("  {:<14} {}\n", kind.cyan(), token.text)
        };
        output.push_str(&line);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{analyze, parse_command, tokenize};
    use chrono::FixedOffset;

    #[test]
    fn test_analysis_pretty_mentions_fields() {
        let zone = FixedOffset::west_opt(3 * 3600).unwrap();
        let now = zone.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        let input = "agendá reunión viernes a las 15:30";
        let command = parse_command(input).unwrap();
        let action = analyze(input, &now).unwrap();

        let text = format_analysis_pretty(&command, &action);
        assert!(text.contains("reunión"));
        assert!(text.contains("evento"));
        assert!(text.contains("viernes"));
        assert!(text.contains("15:30"));
        assert!(text.contains("2024-03-15"));
    }

    #[test]
    fn test_tokens_pretty_counts_all() {
        let text = format_tokens_pretty(&tokenize("agendá reunión hoy"));
        assert!(text.starts_with("4 tokens"));
        assert!(text.contains("agendá"));
    }
}
