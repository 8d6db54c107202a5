//! One interaction step over a single user's session.
//!
//! These functions mutate the session through the [`Wizard`] and return what
//! to show next. Persistence is the caller's job.

use shelf_core::pricing::{Pricer, PricingError};
use shelf_core::wizard::MAX_BATCH;
use shelf_core::{InputMode, SubmitOutcome, UserSession, Wizard, WizardState};

use crate::action::Action;
use crate::render::{self, menu};
use crate::screen::Screen;

/// Applies a button press.
pub fn apply_action(session: &mut UserSession, pricer: &dyn Pricer, action: &Action) -> Screen {
    match action {
        Action::Menu => menu(render::CHOOSE_ACTION),
        Action::Add => {
            let idx = Wizard::new(session).start_new();
            prompt_current(session, &format!("Добавляем секцию {}.\n\n", idx + 1))
        }
        Action::BatchMenu => render::batch_menu(),
        Action::Batch(count) => {
            let started = Wizard::new(session).start_batch(*count);
            match started {
                Ok(first) => prompt_current(
                    session,
                    &format!("Добавляем секции {}-{}.\n\n", first + 1, first + count),
                ),
                Err(_) => menu(format!(
                    "Можно добавить от 1 до {} секций. Выбери действие:",
                    MAX_BATCH
                )),
            }
        }
        Action::List(page) => render::section_list(&session.sections, *page),
        Action::Open(idx) => match session.sections.get(*idx) {
            Some(section) => render::section_card(section, *idx),
            None => menu(render::NOT_FOUND),
        },
        Action::Edit(idx) => {
            let started = Wizard::new(session).start_edit(*idx);
            match started {
                Ok(idx) => {
                    prompt_current(session, &format!("Редактируем секцию {}.\n\n", idx + 1))
                }
                Err(_) => menu(render::NOT_FOUND),
            }
        }
        Action::Delete(idx) => match Wizard::new(session).delete_record(*idx) {
            Ok(_) => menu(render::DELETED),
            Err(_) => menu(render::NOT_FOUND),
        },
        Action::Apply => match pricer.quote(&session.sections) {
            Ok(quote) => menu(render::summary(&session.sections, &quote)),
            Err(PricingError::NothingToPrice) => menu(render::NOTHING_TO_PRICE),
        },
        Action::Reset => {
            Wizard::new(session).reset();
            menu(render::RESET_DONE)
        }
        Action::Pick { field, value } => {
            let outcome = Wizard::new(session).pick(*field, value);
            render_outcome(session, outcome)
        }
        Action::Manual => {
            Wizard::new(session).set_input_mode(InputMode::Manual);
            prompt_current(session, "")
        }
        Action::Presets => {
            Wizard::new(session).set_input_mode(InputMode::Presets);
            prompt_current(session, "")
        }
        Action::Back => {
            Wizard::new(session).step_back();
            prompt_current(session, "")
        }
        Action::Cancel => match Wizard::new(session).cancel() {
            Some(idx) => menu(format!(
                "Ввод секции {} прерван, введённые значения сохранены.\n\n{}",
                idx + 1,
                render::CHOOSE_ACTION
            )),
            None => menu(render::CHOOSE_ACTION),
        },
    }
}

/// Feeds typed text to the wizard.
pub fn apply_text(session: &mut UserSession, text: &str) -> Screen {
    let outcome = Wizard::new(session).submit(text);
    render_outcome(session, outcome)
}

fn render_outcome(session: &mut UserSession, outcome: SubmitOutcome) -> Screen {
    match outcome {
        SubmitOutcome::Advanced { .. } => prompt_current(session, ""),
        SubmitOutcome::Rejected { error, .. } => {
            prompt_current(session, &format!("{}\n\n", render::rejection(&error)))
        }
        SubmitOutcome::RecordCompleted { record, next } => {
            let intro = format!(
                "{}\n\n{}\n\nДалее секция {}.\n\n",
                render::DONE,
                completed_card(session, record),
                next + 1
            );
            prompt_current(session, &intro)
        }
        SubmitOutcome::Completed { record } => menu(format!(
            "{}\n\n{}",
            render::DONE,
            completed_card(session, record)
        )),
        SubmitOutcome::MissingRecord => menu(render::NOT_FOUND),
        SubmitOutcome::Idle => menu(render::CHOOSE_ACTION),
        SubmitOutcome::Stale { .. } => {
            prompt_current(session, "Эта кнопка уже неактуальна.\n\n")
        }
    }
}

fn completed_card(session: &UserSession, record: usize) -> String {
    session
        .sections
        .get(record)
        .map(|s| render::format_section(s, record))
        .unwrap_or_default()
}

/// Prompt for whatever the wizard expects now, or the menu when idle.
fn prompt_current(session: &mut UserSession, intro: &str) -> Screen {
    let wizard = Wizard::new(session);
    match (wizard.state(), wizard.expected_field()) {
        (WizardState::Collecting { record, input_mode, .. }, Some(descriptor)) => {
            render::field_prompt(intro, record, descriptor, input_mode)
        }
        _ => menu(format!("{}{}", intro, render::CHOOSE_ACTION)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::pricing::FootprintPricer;
    use shelf_core::{EditPointer, FieldKey, Section};

    const ANSWERS: [&str; 7] = ["2000", "1000", "400", "100", "500", "5", "нет"];

    fn pricer() -> FootprintPricer {
        FootprintPricer::new(1000.0)
    }

    #[test]
    fn test_add_then_answer_everything() {
        let mut session = UserSession::new();

        let screen = apply_action(&mut session, &pricer(), &Action::Add);
        assert!(screen.text.starts_with("Добавляем секцию 1."));
        assert!(screen.text.contains("<b>Высота, мм</b>"));

        let mut last = screen;
        for answer in ANSWERS {
            last = apply_text(&mut session, answer);
        }

        assert!(last.text.starts_with(render::DONE));
        assert!(last.text.contains("Глубина: 400 мм"));
        assert!(last.button_for(&Action::Apply).is_some());
        assert!(session.editing.is_none());
    }

    #[test]
    fn test_invalid_integer_reprompts_same_field() {
        let mut session = UserSession::new();
        apply_action(&mut session, &pricer(), &Action::Add);

        let screen = apply_text(&mut session, "abc");

        assert!(screen.text.starts_with("Нужно целое число (например: 2000)."));
        assert!(screen.text.contains("<b>Высота, мм</b>"));
        assert_eq!(session.editing.as_ref().unwrap().field_i, 0);
        assert_eq!(session.sections[0], Section::new());
    }

    #[test]
    fn test_invalid_boolean_reprompts() {
        let mut session = UserSession::new();
        apply_action(&mut session, &pricer(), &Action::Add);
        for answer in &ANSWERS[..6] {
            apply_text(&mut session, answer);
        }

        let screen = apply_text(&mut session, "может быть");
        assert!(screen.text.starts_with("Введи <b>да</b> или <b>нет</b>."));
        assert_eq!(session.editing.as_ref().unwrap().field_i, 6);
    }

    #[test]
    fn test_text_while_idle_shows_menu() {
        let mut session = UserSession::new();
        let screen = apply_text(&mut session, "2000");
        assert_eq!(screen.text, render::CHOOSE_ACTION);
        assert!(session.sections.is_empty());
    }

    #[test]
    fn test_dangling_pointer_is_cleared() {
        let mut session = UserSession {
            sections: vec![],
            editing: Some(EditPointer::at_start(3)),
        };

        let screen = apply_text(&mut session, "2000");

        assert_eq!(screen.text, render::NOT_FOUND);
        assert!(session.editing.is_none());
    }

    #[test]
    fn test_apply_with_nothing_to_price() {
        let mut session = UserSession::new();
        let screen = apply_action(&mut session, &pricer(), &Action::Apply);
        assert_eq!(screen.text, render::NOTHING_TO_PRICE);
    }

    #[test]
    fn test_apply_prices_sections() {
        let mut session = UserSession::new();
        apply_action(&mut session, &pricer(), &Action::Add);
        for answer in ANSWERS {
            apply_text(&mut session, answer);
        }

        let screen = apply_action(&mut session, &pricer(), &Action::Apply);
        assert!(screen.text.contains("<b>Итого: 2,000.00 руб</b>"));
    }

    #[test]
    fn test_stale_pick_is_ignored() {
        let mut session = UserSession::new();
        apply_action(&mut session, &pricer(), &Action::Add);
        apply_text(&mut session, "2000");

        let stale = Action::Pick {
            field: FieldKey::HeightMm,
            value: "1500".to_string(),
        };
        let screen = apply_action(&mut session, &pricer(), &stale);

        assert!(screen.text.starts_with("Эта кнопка уже неактуальна."));
        assert_eq!(session.sections[0].height_mm, 2000);
        assert_eq!(session.editing.as_ref().unwrap().field_i, 1);
    }

    #[test]
    fn test_batch_walks_through_records() {
        let mut session = UserSession::new();
        let screen = apply_action(&mut session, &pricer(), &Action::Batch(2));
        assert!(screen.text.starts_with("Добавляем секции 1-2."));

        let mut last = screen;
        for answer in ANSWERS {
            last = apply_text(&mut session, answer);
        }
        assert!(last.text.contains("Далее секция 2."));
        assert!(last.text.contains("Секция 2, шаг 1/7"));

        for answer in ANSWERS {
            last = apply_text(&mut session, answer);
        }
        assert!(last.text.starts_with(render::DONE));
        assert!(session.editing.is_none());
        assert_eq!(session.sections.len(), 2);
    }

    #[test]
    fn test_batch_out_of_range() {
        let mut session = UserSession::new();
        let screen = apply_action(&mut session, &pricer(), &Action::Batch(11));
        assert!(screen.text.starts_with("Можно добавить от 1 до 10 секций."));
        assert!(session.sections.is_empty());
    }

    #[test]
    fn test_cancel_keeps_entered_values() {
        let mut session = UserSession::new();
        apply_action(&mut session, &pricer(), &Action::Add);
        apply_text(&mut session, "1800");

        let screen = apply_action(&mut session, &pricer(), &Action::Cancel);

        assert!(screen.text.starts_with("Ввод секции 1 прерван"));
        assert!(session.editing.is_none());
        assert_eq!(session.sections[0].height_mm, 1800);
    }

    #[test]
    fn test_back_and_manual_mode() {
        let mut session = UserSession::new();
        apply_action(&mut session, &pricer(), &Action::Add);
        apply_text(&mut session, "1800");

        let screen = apply_action(&mut session, &pricer(), &Action::Back);
        assert!(screen.text.contains("<b>Высота, мм</b>"));

        let screen = apply_action(&mut session, &pricer(), &Action::Manual);
        assert!(screen.button_for(&Action::Presets).is_some());
        assert_eq!(
            session.editing.as_ref().unwrap().input_mode,
            InputMode::Manual
        );
    }

    #[test]
    fn test_list_pages_through_sections() {
        let mut session = UserSession {
            sections: vec![Section::new(); render::LIST_PAGE_SIZE + 1],
            editing: None,
        };

        let first = apply_action(&mut session, &pricer(), &Action::List(0));
        assert!(first.button_for(&Action::Open(render::LIST_PAGE_SIZE)).is_none());
        let next = first.button_for(&Action::List(1)).unwrap().action.clone();

        let second = apply_action(&mut session, &pricer(), &next);
        assert!(second.button_for(&Action::Open(render::LIST_PAGE_SIZE)).is_some());
        assert!(second.button_for(&Action::List(0)).is_some());
    }

    #[test]
    fn test_open_edit_delete_missing_section() {
        let mut session = UserSession::new();
        for action in [Action::Open(0), Action::Edit(0), Action::Delete(0)] {
            let screen = apply_action(&mut session, &pricer(), &action);
            assert_eq!(screen.text, render::NOT_FOUND);
        }
        assert!(session.editing.is_none());
    }

    #[test]
    fn test_delete_section_under_edit_clears_pointer() {
        let mut session = UserSession::new();
        apply_action(&mut session, &pricer(), &Action::Add);

        let screen = apply_action(&mut session, &pricer(), &Action::Delete(0));

        assert_eq!(screen.text, render::DELETED);
        assert!(session.sections.is_empty());
        assert!(session.editing.is_none());
    }
}
