use dioxus::prelude::*;

use weekday_core::model::Weekday;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm};

/// The single quiz screen: year selector, generated date, weekday buttons,
/// feedback and the running score.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| QuizVm::start(ctx.starting_year()));

    let year = vm.read().year();
    let date_text = vm.read().formatted_date();
    let answered = vm.read().answered();
    let feedback = vm.read().feedback().cloned();
    let score_line = vm.read().score_line();

    rsx! {
        section { class: "quiz",
            header { class: "view-header",
                h2 { class: "view-title", "Which day of the week?" }
            }

            div { class: "year-selector",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    aria_label: "Previous year",
                    onclick: move |_| vm.write().apply(QuizIntent::PreviousYear),
                    "◀"
                }
                span { class: "year-display", "{year}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    aria_label: "Next year",
                    onclick: move |_| vm.write().apply(QuizIntent::NextYear),
                    "▶"
                }
            }

            p { class: "date-display", "{date_text}" }

            div { class: "weekday-buttons",
                for day in Weekday::ALL {
                    button {
                        class: "btn btn-weekday",
                        r#type: "button",
                        disabled: answered,
                        onclick: move |_| vm.write().apply(QuizIntent::Guess(day)),
                        "{day.name()}"
                    }
                }
            }

            match feedback {
                Some(feedback) => rsx! {
                    p {
                        class: if feedback.correct { "feedback correct" } else { "feedback wrong" },
                        "{feedback.message}"
                    }
                },
                None => rsx! {
                    p { class: "feedback" }
                },
            }

            p { class: "score-display", "{score_line}" }

            if answered {
                button {
                    class: "btn btn-primary next-button",
                    r#type: "button",
                    onclick: move |_| vm.write().apply(QuizIntent::NextDate),
                    "Next date"
                }
            }
        }
    }
}
