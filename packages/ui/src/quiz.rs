use dioxus::prelude::*;
use store::quiz::Quiz;

use crate::icons::{FaCircleCheck, FaCircleXmark, FaTrophy};
use crate::Icon;

/// The end-of-module quiz. Reports the score when the last question is done.
#[component]
pub fn QuizView(on_complete: EventHandler<usize>) -> Element {
    let mut quiz = use_signal(Quiz::default);

    let state = quiz.read().clone();

    if state.finished() {
        return rsx! {
            div {
                class: "quiz quiz-result",
                Icon { icon: FaTrophy, width: 40, height: 40 }
                h3 { "Quiz complete" }
                p { "You answered {state.score()} of {state.len()} correctly ({state.percent()}%)." }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| quiz.set(Quiz::default()),
                    "Try again"
                }
            }
        };
    }

    let Some(question) = state.question().copied() else {
        return rsx! {};
    };
    let selected = state.selected();
    let last = state.position() + 1 == state.len();

    rsx! {
        div {
            class: "quiz",
            div { class: "quiz-progress", "Question {state.position() + 1} of {state.len()}" }
            h3 { "{question.prompt}" }
            div {
                class: "quiz-options",
                for (i, option) in question.options.iter().enumerate() {
                    button {
                        key: "{i}",
                        class: match selected {
                            Some(_) if i == question.correct => "quiz-option correct",
                            Some(s) if s == i => "quiz-option wrong",
                            _ => "quiz-option",
                        },
                        disabled: selected.is_some(),
                        onclick: move |_| {
                            quiz.write().answer(i);
                        },
                        "{option}"
                        if selected.is_some() && i == question.correct {
                            Icon { icon: FaCircleCheck, width: 14, height: 14 }
                        } else if selected == Some(i) {
                            Icon { icon: FaCircleXmark, width: 14, height: 14 }
                        }
                    }
                }
            }
            if selected.is_some() {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let done = {
                            let mut quiz = quiz.write();
                            quiz.next();
                            quiz.finished().then(|| quiz.score())
                        };
                        if let Some(score) = done {
                            on_complete.call(score);
                        }
                    },
                    if last { "See result" } else { "Next question" }
                }
            }
        }
    }
}
