//! Texts and keyboards shown to the user.
//!
//! Messages are in Russian and use Telegram HTML (`<b>` only).

use shelf_core::pricing::{BillOfMaterials, QuantityUnit, Quote};
use shelf_core::section::FIELD_COUNT;
use shelf_core::wizard::MAX_BATCH;
use shelf_core::{FieldDescriptor, FieldKey, InputMode, Section, ValidationError};

use crate::action::Action;
use crate::screen::{Button, Keyboard, Screen};

pub const WELCOME: &str = "Калькулятор стеллажей.\n\nВыбери действие:";
pub const CHOOSE_ACTION: &str = "Выбери действие:";
pub const NOT_FOUND: &str = "Секция не найдена. Меню:";
pub const NOTHING_TO_PRICE: &str = "Секций нет. Добавь хотя бы одну.";
pub const NO_SECTIONS: &str = "Пока нет секций. Нажми ➕ Добавить секцию.";
pub const UNRECOGNIZED: &str = "Не понял команду. Выбери действие:";
pub const DELETED: &str = "Удалено. Выбери действие:";
pub const RESET_DONE: &str = "Все секции удалены. Выбери действие:";
pub const DONE: &str = "Готово ✅";

/// Telegram rejects longer message texts.
pub const MAX_MESSAGE_CHARS: usize = 4096;
/// Section buttons per list page.
pub const LIST_PAGE_SIZE: usize = 8;

const PRESETS_PER_ROW: usize = 3;
const BATCH_PER_ROW: usize = 5;

pub fn main_menu() -> Keyboard {
    Keyboard::new()
        .row(vec![Button::new("➕ Добавить секцию", Action::Add)])
        .row(vec![Button::new("➕➕ Несколько секций", Action::BatchMenu)])
        .row(vec![Button::new("📋 Секции", Action::List(0))])
        .row(vec![Button::new("✅ Применить", Action::Apply)])
        .row(vec![Button::new("🧹 Сбросить всё", Action::Reset)])
}

/// `text` followed by the main menu.
pub fn menu(text: impl Into<String>) -> Screen {
    Screen::new(text, main_menu())
}

fn back_to_menu() -> Button {
    Button::new("⬅️ Назад", Action::Menu)
}

pub fn format_section(section: &Section, idx: usize) -> String {
    format!(
        "<b>Секция {}</b>\n\
         Высота: {} мм\n\
         Ширина: {} мм\n\
         Глубина: {} мм\n\
         Нагрузка на полку: {} кг\n\
         Макс. общая нагрузка: {} кг\n\
         Кол-во уровней: {}\n\
         Доп секция: {}",
        idx + 1,
        section.height_mm,
        section.width_mm,
        section.depth_mm,
        section.load_per_shelf_kg,
        section.max_total_load_kg,
        section.levels_count,
        if section.extra_section { "да" } else { "нет" },
    )
}

/// Formats an amount with two decimals and comma-grouped thousands,
/// e.g. `12,345.60`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, frac)
}

/// Prompt for `descriptor` of section `record`, preceded by `intro`.
pub fn field_prompt(
    intro: &str,
    record: usize,
    descriptor: &FieldDescriptor,
    mode: InputMode,
) -> Screen {
    let step = descriptor.key.position() + 1;
    let mut text = format!(
        "{}Секция {}, шаг {}/{}.\nВведи: <b>{}</b>",
        intro,
        record + 1,
        step,
        FIELD_COUNT,
        descriptor.label
    );

    let mut keyboard = Keyboard::new();
    let toggle = match mode {
        InputMode::Presets => {
            for chunk in descriptor.presets.chunks(PRESETS_PER_ROW) {
                keyboard = keyboard.row(
                    chunk
                        .iter()
                        .map(|value| Button::new(*value, pick(descriptor.key, value)))
                        .collect(),
                );
            }
            Button::new("⌨️ Вручную", Action::Manual)
        }
        InputMode::Manual => {
            text.push_str("\n(отправь значение сообщением)");
            Button::new("🔘 Варианты", Action::Presets)
        }
    };

    let keyboard = keyboard.row(vec![
        toggle,
        Button::new("↩️ Шаг назад", Action::Back),
        Button::new("✖️ Отмена", Action::Cancel),
    ]);
    Screen::new(text, keyboard)
}

fn pick(field: FieldKey, value: &str) -> Action {
    Action::Pick {
        field,
        value: value.to_string(),
    }
}

/// Re-prompt after a rejected value.
pub fn rejection(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::NotAnInteger(_) => "Нужно целое число (например: 2000).",
        ValidationError::NotABoolean(_) => "Введи <b>да</b> или <b>нет</b>.",
        ValidationError::WrongDomain { .. } | ValidationError::OutOfRange { .. } => {
            "Недопустимое значение."
        }
    }
}

pub fn batch_menu() -> Screen {
    let counts: Vec<usize> = (1..=MAX_BATCH).collect();
    let mut keyboard = Keyboard::new();
    for chunk in counts.chunks(BATCH_PER_ROW) {
        keyboard = keyboard.row(
            chunk
                .iter()
                .map(|n| Button::new(n.to_string(), Action::Batch(*n)))
                .collect(),
        );
    }
    Screen::new(
        "Сколько секций добавить?",
        keyboard.row(vec![back_to_menu()]),
    )
}

/// One page of section buttons. A page past the end shows the last one.
pub fn section_list(sections: &[Section], page: usize) -> Screen {
    if sections.is_empty() {
        return menu(NO_SECTIONS);
    }
    let pages = sections.len().div_ceil(LIST_PAGE_SIZE);
    let page = page.min(pages - 1);
    let start = page * LIST_PAGE_SIZE;
    let end = (start + LIST_PAGE_SIZE).min(sections.len());

    let mut keyboard = Keyboard::new();
    for idx in start..end {
        keyboard = keyboard.row(vec![Button::new(
            format!("Секция {}", idx + 1),
            Action::Open(idx),
        )]);
    }

    let mut paging = Vec::new();
    if page > 0 {
        paging.push(Button::new("◀️ Назад", Action::List(page - 1)));
    }
    if page + 1 < pages {
        paging.push(Button::new("Далее ▶️", Action::List(page + 1)));
    }
    let keyboard = keyboard.row(paging).row(vec![back_to_menu()]);

    let text = if pages > 1 {
        format!("Секции (стр. {}/{}):", page + 1, pages)
    } else {
        "Секции:".to_string()
    };
    Screen::new(text, keyboard)
}

pub fn section_card(section: &Section, idx: usize) -> Screen {
    let keyboard = Keyboard::new()
        .row(vec![
            Button::new("✏️ Редактировать", Action::Edit(idx)),
            Button::new("🗑 Удалить", Action::Delete(idx)),
        ])
        .row(vec![back_to_menu()]);
    Screen::new(format_section(section, idx), keyboard)
}

/// Summary of every section with the quote total, at most
/// [`MAX_MESSAGE_CHARS`] long.
///
/// Full cards are used while they fit, then one line per section. Sections
/// that still do not fit are counted in a closing note. The totals are
/// always kept.
pub fn summary(sections: &[Section], quote: &Quote) -> String {
    const HEADER: &str = "✅ <b>Итог</b>\n\n";

    let footer = summary_footer(quote);
    let budget = MAX_MESSAGE_CHARS.saturating_sub(char_len(HEADER) + char_len(&footer));

    let cards: String = sections
        .iter()
        .enumerate()
        .map(|(idx, section)| format!("{}\n\n", format_section(section, idx)))
        .collect();
    let body = if char_len(&cards) <= budget {
        cards
    } else {
        compact_body(sections, budget)
    };

    format!("{}{}{}", HEADER, body, footer)
}

/// One line per section, cut short with an "and N more" note if needed.
fn compact_body(sections: &[Section], budget: usize) -> String {
    // Trailing blank line before the totals.
    let budget = budget.saturating_sub(1);
    let mut body = String::new();
    let mut used = 0;
    let mut shown = 0;

    for (idx, section) in sections.iter().enumerate() {
        let line = format!("{}\n", format_section_line(section, idx));
        let after = sections.len() - idx - 1;
        let reserve = if after > 0 { char_len(&omitted(after)) } else { 0 };
        if used + char_len(&line) + reserve > budget {
            break;
        }
        used += char_len(&line);
        body.push_str(&line);
        shown += 1;
    }

    if shown < sections.len() {
        body.push_str(&omitted(sections.len() - shown));
    }
    body.push('\n');
    body
}

fn omitted(count: usize) -> String {
    format!("… и ещё {} секций.\n", count)
}

fn format_section_line(section: &Section, idx: usize) -> String {
    format!(
        "Секция {}: {}×{}×{} мм, уровней {}{}",
        idx + 1,
        section.height_mm,
        section.width_mm,
        section.depth_mm,
        section.levels_count,
        if section.extra_section { ", доп" } else { "" },
    )
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn summary_footer(quote: &Quote) -> String {
    let mut text = String::new();
    match quote.unit {
        QuantityUnit::SquareMetres => {
            text.push_str(&format!("Площадь полок: {:.2} м²\n", quote.quantity));
        }
        QuantityUnit::Kilograms => {
            if let Some(bill) = &quote.bill {
                text.push_str(&bill_lines(bill));
            }
            text.push_str(&format!("Масса: {:.2} кг\n", quote.quantity));
        }
    }

    text.push_str(&format!("\n<b>Итого: {} руб</b>", format_money(quote.total)));
    text
}

fn bill_lines(bill: &BillOfMaterials) -> String {
    format!(
        "Стойки: {} шт (высота {} мм)\n\
         Балки: {} шт\n\
         Полки: {} шт\n\
         Крепёж: {} компл.\n",
        bill.posts, bill.post_height_mm, bill.beams, bill.shelves, bill.fastener_packs
    )
}
