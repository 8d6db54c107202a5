use colored::Colorize;
use shelf_application::Screen;

/// Replaces `<b>` markup with terminal bold.
pub fn terminal_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("<b>") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];
        match after.find("</b>") {
            Some(end) => {
                out.push_str(&after[..end].bold().to_string());
                rest = &after[end + 4..];
            }
            None => {
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Prints the screen text and numbers its buttons from 1.
pub fn print_screen(screen: &Screen) {
    println!();
    for line in terminal_text(&screen.text).lines() {
        println!("{}", line);
    }
    if screen.keyboard.is_empty() {
        return;
    }
    println!();
    for (n, button) in screen.keyboard.buttons().enumerate() {
        println!("  {} {}", format!("[{}]", n + 1).bright_cyan(), button.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_text_strips_tags() {
        colored::control::set_override(false);
        assert_eq!(terminal_text("Введи: <b>Высота, мм</b>"), "Введи: Высота, мм");
        assert_eq!(terminal_text("<b>a</b> and <b>b</b>!"), "a and b!");
        assert_eq!(terminal_text("no markup"), "no markup");
        assert_eq!(terminal_text("broken <b>tag"), "broken tag");
    }
}
