use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use log::{error, info};
use yew::prelude::*;

use crate::config;
use crate::countdown::{parse_target, Countdown};

#[derive(Properties, PartialEq)]
pub struct CountTimerProps {
    #[prop_or(AttrValue::Static(config::EVENT_START))]
    pub target_date: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CountTimer)]
pub fn count_timer(props: &CountTimerProps) -> Html {
    let countdown = use_state(|| None::<Countdown>);

    {
        let countdown = countdown.clone();
        use_effect_with_deps(
            move |target_date: &AttrValue| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                match parse_target(target_date) {
                    Ok(target) => {
                        info!("Counting down to {}", target);
                        let mut state = Countdown::new(target);
                        let running = state.tick(Utc::now());
                        countdown.set(Some(state.clone()));

                        if running {
                            let handle = interval_handle.clone();
                            let interval = Interval::new(config::COUNTDOWN_TICK_MS, move || {
                                let running = state.tick(Utc::now());
                                countdown.set(Some(state.clone()));
                                if !running {
                                    info!("Countdown reached its target");
                                    // Can't drop the interval from inside its own callback
                                    let handle = handle.clone();
                                    wasm_bindgen_futures::spawn_local(async move {
                                        handle.borrow_mut().take();
                                    });
                                }
                            });
                            *interval_handle.borrow_mut() = Some(interval);
                        }
                    }
                    Err(e) => {
                        error!("{}", e);
                        countdown.set(None);
                    }
                }

                move || {
                    // Cancel on unmount or when the target changes
                    interval_handle.borrow_mut().take();
                }
            },
            props.target_date.clone(),
        );
    }

    let Some(state) = (*countdown).clone() else {
        return html! {};
    };

    if state.is_live() {
        return html! {
            <div class={classes!("count-timer", "count-timer--live", props.class.clone())}>
                <h2 class="count-timer__live-title">
                    <span class="count-timer__rocket">{"🚀"}</span>
                    {"Hackathon is Live!"}
                    <span class="count-timer__rocket count-timer__rocket--late">{"🚀"}</span>
                </h2>
                <p>{"The AI Hacks Hackathon has started!"}</p>
                <style>{COUNT_TIMER_CSS}</style>
            </div>
        };
    }

    let units = state.remaining().units();
    let last = units.len() - 1;

    html! {
        <div class={classes!("count-timer", props.class.clone())}>
            <div class="count-timer__row">
                { for units.iter().enumerate().map(|(i, (label, value))| html! {
                    <>
                        <div class={classes!("count-timer__unit", format!("count-timer__unit--{}", label.to_lowercase()))}>
                            <div class="count-timer__value">{format!("{:02}", value)}</div>
                            <div class="count-timer__label">{*label}</div>
                        </div>
                        if i < last {
                            <div class="count-timer__colon">{":"}</div>
                        }
                    </>
                }) }
            </div>
            <style>{COUNT_TIMER_CSS}</style>
        </div>
    }
}

const COUNT_TIMER_CSS: &str = r#"
.count-timer {
    width: 100%;
    max-width: 42rem;
    margin: 0 auto;
    padding: 2rem 1rem 4rem;
}
.count-timer__row {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}
.count-timer__unit {
    text-align: center;
}
.count-timer__value {
    font-size: 4.5rem;
    font-weight: 900;
    line-height: 1;
    margin-bottom: 0.5rem;
    font-family: system-ui, -apple-system, sans-serif;
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    filter: drop-shadow(0 0 20px rgba(34, 211, 238, 0.4));
}
.count-timer__label {
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: rgba(255, 255, 255, 0.8);
}
.count-timer__unit--days .count-timer__value { background: linear-gradient(135deg, #f87171, #fb923c); -webkit-background-clip: text; }
.count-timer__unit--hours .count-timer__value { background: linear-gradient(135deg, #facc15, #fbbf24); -webkit-background-clip: text; }
.count-timer__unit--minutes .count-timer__value { background: linear-gradient(135deg, #22d3ee, #60a5fa); -webkit-background-clip: text; }
.count-timer__unit--seconds .count-timer__value { background: linear-gradient(135deg, #c084fc, #f472b6); -webkit-background-clip: text; }
.count-timer__colon {
    align-self: flex-start;
    margin-top: 0.5rem;
    font-size: 3.75rem;
    font-weight: 900;
    color: #22d3ee;
    animation: pulse 2s ease-in-out infinite;
}
.count-timer--live {
    text-align: center;
    background: linear-gradient(135deg, rgba(20, 83, 45, 0.3), rgba(6, 78, 59, 0.3));
    border: 2px solid rgba(74, 222, 128, 0.3);
    border-radius: 1rem;
    backdrop-filter: blur(4px);
}
.count-timer__live-title {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    font-size: 2.25rem;
    font-weight: 900;
    color: #4ade80;
}
.count-timer--live p {
    color: #bbf7d0;
    font-size: 1.125rem;
    font-weight: 600;
}
.count-timer__rocket {
    display: inline-block;
    animation: bounce 1s infinite;
}
.count-timer__rocket--late {
    animation-delay: 0.2s;
}
@keyframes pulse {
    50% { opacity: 0.4; }
}
@keyframes bounce {
    0%, 100% { transform: translateY(-25%); }
    50% { transform: translateY(0); }
}
@media (max-width: 768px) {
    .count-timer__value { font-size: 3rem; }
    .count-timer__colon { font-size: 2.25rem; }
    .count-timer__row { gap: 0.5rem; }
}
"#;
