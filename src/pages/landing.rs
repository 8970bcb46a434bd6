use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::count_timer::CountTimer;
use crate::components::registration_modal::RegistrationModal;
use crate::config;
use crate::context::use_registration;
use crate::registration::form::RegistrationAction;

/// Share of the scrollable height over which the hero fades out.
const HERO_FADE_SPAN: f64 = 0.2;

/// Hero opacity for a given window scroll offset: 1 at the top, 0 once a
/// fifth of the scrollable distance (document height minus viewport) is
/// behind us.
pub fn hero_opacity(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 1.0;
    }
    let progress = (scroll_y / scrollable).clamp(0.0, 1.0);
    (1.0 - progress / HERO_FADE_SPAN).clamp(0.0, 1.0)
}

struct Step {
    num: &'static str,
    title: &'static str,
    desc: &'static str,
    tone: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        num: "01",
        title: "Choose a Problem",
        desc: "College, daily life, or social issues. Pick anything that makes you shout: \"There has to be an easier way!\"",
        tone: "red",
    },
    Step {
        num: "02",
        title: "Design a Crazy Solution",
        desc: "Use AI tools to create a visionary solution. The wilder your idea, the better.",
        tone: "yellow",
    },
    Step {
        num: "03",
        title: "Build a Prototype",
        desc: "Show how it works through a prototype, diagram, or video demo. Keep it simple but clever.",
        tone: "green",
    },
    Step {
        num: "04",
        title: "Pitch Your Vision",
        desc: "Submit a pitch deck: Problem, Solution, AI Integration, Target Users, and Massive Impact.",
        tone: "cyan",
    },
];

const BENEFITS: &[(&str, &str)] = &[
    ("📚", "Free AI Learning Kit ₹10,000"),
    ("✨", "Startup Resource Repository"),
    ("🏅", "Participation Certificate"),
    ("👥", "Live AI Workshop"),
    ("🏆", "Cash Prizes & Internships"),
    ("🚀", "Career Launchpad"),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Anjali R",
        "PSG College of Technology",
        "The feedback from mentors was priceless. This gave me confidence to present publicly.",
    ),
    (
        "Rohit S",
        "Kumaraguru College of Technology",
        "Changed how I view AI. Built something useful in just 2 days with practical tools.",
    ),
    (
        "Sahana M",
        "Coimbatore Institute of Technology",
        "Perfect blend of creativity and tech. Made connections with real professionals.",
    ),
];

struct Objection {
    objection: &'static str,
    response: &'static str,
    detail: &'static str,
}

const OBJECTIONS: &[Objection] = &[
    Objection {
        objection: "I'm Not a Tech Genius / I Don't Know How to Code.",
        response: "PERFECT! This event is MADE for you.",
        detail: "This isn't a coding hackathon. It's about using existing, free AI tools (like ChatGPT, Canva AI) creatively. We'll teach you how. If you can use Instagram, you can build something amazing here.",
    },
    Objection {
        objection: "I'm Too Busy with Classes and Assignments.",
        response: "This event is designed to SAVE you time in the long run.",
        detail: "It's only 2 evenings (6:30-9:30 PM), so it doesn't clash with your schedule. The skills you learn in AI will help you complete future assignments faster and smarter. Think of it as a high-value, time-saving investment.",
    },
    Objection {
        objection: "My Idea Isn't Good Enough or It's Too Simple.",
        response: "The simplest ideas are often the most brilliant!",
        detail: "We're not looking for the next SpaceX. We're looking for solutions to real, everyday problems. That 'simple' idea to automate your notes or manage deadlines could be exactly what thousands of students need. Our mentors will help you polish it!",
    },
    Objection {
        objection: "It's Online. Won't It Be Impersonal and Boring?",
        response: "Get ready for a live, interactive experience!",
        detail: "We have live workshops, real-time mentorship, and collaborative sessions. You'll be in a community of builders, not just watching another boring webinar. The energy will be electric!",
    },
    Objection {
        objection: "What's the Point? It's Just Another Certificate.",
        response: "This is more than a PDF. It's a career launchpad.",
        detail: "Beyond the certificate, you get: Prizes & Internship Offers from real companies, a tangible project for your portfolio, networking with industry experts and sponsors, and proven skills that you can talk about in your next interview.",
    },
    Objection {
        objection: "I Don't Have a Team. I'll Be at a Disadvantage.",
        response: "Go solo or let us help you find a team!",
        detail: "You can absolutely participate and win as an individual. If you want a team, we'll have dedicated channels and sessions to help solo innovators connect and form all-star squads.",
    },
    Objection {
        objection: "Why Should I Pay Entry Fee?",
        response: "Think of it as a commitment to your own growth.",
        detail: "For less than the cost of a movie ticket, you're getting: A ₹10,000 learning kit for FREE, live mentorship, and a chance to win cash prizes that are many times the entry fee. It ensures that only serious, motivated students join, making the experience better for everyone.",
    },
];

const FAQS: &[(&str, &str)] = &[
    (
        "Do I need to know coding?",
        "Not at all. This focuses on creativity and using AI tools, not programming.",
    ),
    (
        "Can I participate solo?",
        "Yes! Individuals and teams (2–5 members) are welcome.",
    ),
    (
        "What is the judging process?",
        "Hybrid model using Kalam Vidya AI Judge and expert mentors for fairness.",
    ),
    (
        "Is it online or offline?",
        "Round 1 is online (Nov 8–9). Top 10 teams advance to Round 2: offline final pitch (Nov 16) in Coimbatore.",
    ),
    (
        "Why should I pay entry fee?",
        "Get ₹10,000 learning kit, live mentorship, and chance to win prizes many times the entry fee.",
    ),
];

const CONTACTS: &[(&str, &str)] = &[
    ("Selvan", "+91 9361802547"),
    ("Mugesh", "+91 6385329845"),
    ("Raj", "+91 9443884738"),
];

#[derive(Properties, PartialEq)]
struct RegisterButtonProps {
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(RegisterButton)]
fn register_button(props: &RegisterButtonProps) -> Html {
    let form = use_registration();
    let onclick = Callback::from(move |_: MouseEvent| form.dispatch(RegistrationAction::Open));

    html! {
        <button class={classes!("cta-button", props.class.clone())} onclick={onclick}>
            <span class="cta-button__icon">{"🚀"}</span>
            {props.label.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct CollapsibleProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: AttrValue,
    children: Children,
}

#[function_component(Collapsible)]
fn collapsible(props: &CollapsibleProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("collapsible", if *is_open { "open" } else { "" })}>
            <button class="collapsible__header" onclick={toggle}>
                <span class="collapsible__icon">{"💡"}</span>
                <div class="collapsible__titles">
                    <h3>{&props.title}</h3>
                    if !props.subtitle.is_empty() {
                        <p>{&props.subtitle}</p>
                    }
                </div>
                <span class="collapsible__glyph">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="collapsible__body">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let opacity = use_state(|| 1.0_f64);

    {
        let opacity = opacity.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().and_then(|window| {
                    let document = window.document()?;
                    let viewport = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let Some(root) = document.document_element() else {
                            return;
                        };
                        let scroll_y = viewport.scroll_y().unwrap_or(0.0);
                        let viewport_height = viewport
                            .inner_height()
                            .ok()
                            .and_then(|height| height.as_f64())
                            .unwrap_or(0.0);
                        opacity.set(hero_opacity(scroll_y, f64::from(root.scroll_height()), viewport_height));
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .ok()?;
                    Some(scroll_callback)
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <section class="hero" style={format!("opacity: {:.3};", *opacity)}>
            <div class="hero__content">
                <h1 class="hero__title">{"AI HACKS"}</h1>
                <p class="hero__edition">{"Coimbatore Edition 2025"}</p>
                <div class="hero__meta">
                    <p>{"Hosted by "}<span class="highlight">{"Automate Everything"}</span></p>
                    <p class="hero__sponsor">
                        {"Sponsored by "}
                        <a href="https://pinesphere.com/" target="_blank" rel="noopener noreferrer">
                            <span>{"The PineSphere"}</span>
                        </a>
                    </p>
                    <p class="hero__dates">{"✨ November 8–9, 2025"}</p>
                    <p class="hero__prize">{"Win Cash Prizes & Internships"}</p>
                </div>
                <RegisterButton label="REGISTER NOW" class="cta-button--hero" />
            </div>
        </section>
    }
}

#[function_component(JudgeSection)]
fn judge_section() -> Html {
    let show_details = use_state(|| false);

    let toggle = {
        let show_details = show_details.clone();
        Callback::from(move |_: MouseEvent| show_details.set(!*show_details))
    };

    html! {
        <section class="section judge">
            <div class="judge__title">
                <span class="judge__icon">{"🧠"}</span>
                <h2>{"Kalam Vidya AI Judge"}</h2>
            </div>
            <p class="section__lead">
                {"Revolutionary "}<span class="highlight">{"Explainable AI Agent"}</span>
                {" evaluates your pitch in real-time during Google Meet sessions."}
            </p>
            <div class="judge__features">
                { for ["AI Live Interaction", "Hybrid Evaluation", "Personalized Feedback"].iter().map(|feature| html! {
                    <div class="card judge__feature"><p>{*feature}</p></div>
                }) }
            </div>
            <button class="outline-button" onclick={toggle}>
                {if *show_details { "Hide Details" } else { "How Evaluation Works" }}
            </button>
            if *show_details {
                <div class="judge__details">
                    <div class="card">
                        <h3 class="judge__heading">{"The Selection Process"}</h3>
                        <h4>{"✔ AI Live Interaction (Online Round)"}</h4>
                        <p>{"The Kalam Vidya AI Agent joins your Google Meet session during the online pitch. It actively listens to your presentation, analyzes your pitch deck in real-time, and asks follow-up questions like a human venture capitalist using its vast database of startup success factors."}</p>
                        <h4>{"✔ Hybrid Evaluation & Majority Weight"}</h4>
                        <p>{"The AI's assessment combines with insights from two prominent human tech founders from India. The AI Agent holds the majority weight in the final decision, ensuring the process is data-driven and objective."}</p>
                        <h4>{"🏆 Top 10 Teams Advance to Finals"}</h4>
                        <p>
                            {"The top "}<span class="highlight">{"10 teams"}</span>
                            {" selected by this revolutionary hybrid process will be invited to the high-stakes "}
                            <span class="highlight">{"Offline Pitch (Round 2)"}</span>
                            {" in Coimbatore on November 16, 2025."}
                        </p>
                    </div>
                    <div class="card">
                        <h3 class="judge__heading judge__heading--green">{"Unprecedented Feedback Guarantee"}</h3>
                        <p>{"Even if you don't make the finals, you'll leave with more valuable insights than any other hackathon:"}</p>
                        <h4>{"⭐ Explainable Results"}</h4>
                        <p>{"Every team receives explicit, personalized feedback explaining why their idea wasn't selected and why winning ideas were chosen."}</p>
                        <h4>{"⚡ Negotiation Opportunity"}</h4>
                        <p>{"Unique window to negotiate your score and feedback with organizers and the Kalam Vidya AI Agent itself! Challenge the assessment and gain valuable startup validation insights."}</p>
                        <p class="judge__note">{"This transparency guarantees your entry fee is an investment in unparalleled learning and actionable startup validation."}</p>
                    </div>
                </div>
            }
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <div class="landing__background"></div>

            <Hero />

            <section class="section theme">
                <h2 class="gradient-cyan">{"THEME: Use AI to Make Life Easier"}</h2>
                <p class="section__lead">
                    {"Turn stress into creativity. Build "}
                    <span class="highlight">{"Snapchat-level disruption"}</span>
                    {" solutions using ChatGPT, Canva AI, Gemini, Notion, and Replit. No coding required, just imagination and drive."}
                </p>
            </section>

            <section class="section steps">
                <h2 class="gradient-warm">{"GO CRAZY, GET FUNDED"}</h2>
                <div class="steps__grid">
                    { for STEPS.iter().map(|step| html! {
                        <div class={classes!("card", "step", format!("step--{}", step.tone))}>
                            <span class="step__num">{step.num}</span>
                            <h3>{step.title}</h3>
                            <p>{step.desc}</p>
                        </div>
                    }) }
                </div>
                <Collapsible title="What Wins: Impact Over Perfection" subtitle="Tap to reveal the winning formula">
                    <p>
                        {"We are looking for "}<span class="highlight">{"big, disruptive ideas"}</span>
                        {" that solve a painful problem for a large number of people."}
                    </p>
                    <p class="collapsible__quote">{"A strong idea that is 10% built beats a weak idea that is 100% complete."}</p>
                    <p>
                        {"Your project needs to be compelling, innovative, and show a deep understanding of how AI can solve the issue. "}
                        <span class="highlight">{"The pitch is the project."}</span>
                    </p>
                </Collapsible>
            </section>

            <JudgeSection />

            <section class="section benefits">
                <h2 class="gradient-warm">{"WHY JOIN?"}</h2>
                <p class="section__lead">{"Beyond the competition: build skills, network, and launch your future"}</p>
                <div class="benefits__grid">
                    { for BENEFITS.iter().map(|(icon, text)| html! {
                        <div class="card benefit">
                            <span class="benefit__icon">{*icon}</span>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
                <div class="card internship">
                    <h3>{"🏆 Internship Opportunities"}</h3>
                    <p>
                        {"Top performers get "}<span class="highlight">{"exclusive internship offers"}</span>
                        {" from our sponsor PineSphere and partner companies!"}
                    </p>
                    <div class="internship__perks">
                        <div>
                            <p class="internship__perk">{"Paid Internships"}</p>
                            <p>{"Real-world projects with competitive compensation"}</p>
                        </div>
                        <div>
                            <p class="internship__perk">{"Career Fast-Track"}</p>
                            <p>{"Direct path to full-time opportunities"}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section testimonials">
                <h2 class="gradient-warm">{"STUDENT VOICES"}</h2>
                <div class="testimonials__grid">
                    { for TESTIMONIALS.iter().map(|(name, college, text)| html! {
                        <div class="card testimonial">
                            <p class="testimonial__stars">{"★★★★★"}</p>
                            <p class="testimonial__text">{format!("\"{}\"", text)}</p>
                            <p class="testimonial__name">{*name}</p>
                            <p class="testimonial__college">{*college}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section objections">
                <h2 class="gradient-warm">{"REASONS YOU MIGHT HESITATE"}</h2>
                <p class="objections__sub">{"And Why You're Wrong!"}</p>
                <div class="objections__list">
                    { for OBJECTIONS.iter().map(|item| html! {
                        <div class="card objection">
                            <p class="objection__doubt"><span class="objection__cross">{"✖"}</span>{item.objection}</p>
                            <p class="objection__answer"><span class="objection__check">{"✓"}</span>{item.response}</p>
                            <p>{item.detail}</p>
                        </div>
                    }) }
                </div>
                <div class="card bottom-line">
                    <h3>{"The Bottom Line:"}</h3>
                    <p>{"The only real reason you shouldn't join is if you're not ready to learn a valuable skill, have fun, and boost your resume in a single weekend."}</p>
                    <p class="bottom-line__push">{"Don't let doubt hold you back. Your future self will thank you for taking this chance."}</p>
                    <RegisterButton label="SECURE YOUR SPOT NOW!" />
                </div>
            </section>

            <section class="section faq">
                <h2 class="gradient-cool">{"FAQ"}</h2>
                <div class="faq__list">
                    { for FAQS.iter().map(|(question, answer)| html! {
                        <div class="card faq__item">
                            <h3>{"✔ "}{*question}</h3>
                            <p>{*answer}</p>
                        </div>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <h3 class="gradient-cool">{"Contact Us"}</h3>
                <p>{"For more details, reach out to:"}</p>
                <p class="footer__club">{"Automate Everything Club"}</p>
                <div class="footer__contacts">
                    { for CONTACTS.iter().map(|(name, number)| html! {
                        <a class="footer__contact" href={format!("tel:{}", number.replace(' ', ""))}>
                            <div class="footer__contact-name">{*name}</div>
                            <div>{*number}</div>
                        </a>
                    }) }
                </div>
                <p>
                    {"Email: "}
                    <a href="mailto:automateeverythingofficial@gmail.com">{"automateeverythingofficial@gmail.com"}</a>
                </p>
                <div class="footer__bottom">
                    <p>{"Automate Everything © 2025"}</p>
                    <a href="https://pinesphere.com/" target="_blank" rel="noopener noreferrer">
                        {"Sponsored by The PineSphere"}
                    </a>
                    <p>{"Designed for Coimbatore's Brightest Minds"}</p>
                </div>
            </footer>

            <CountTimer target_date={config::EVENT_START} />

            <RegistrationModal />

            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing {
    position: relative;
    min-height: 100vh;
    color: #ffffff;
    overflow-x: hidden;
}
.landing__background {
    position: fixed;
    inset: 0;
    z-index: -1;
    background:
        radial-gradient(circle at 20% 20%, rgba(250, 204, 21, 0.15), transparent 40%),
        radial-gradient(circle at 80% 60%, rgba(147, 51, 234, 0.2), transparent 45%),
        linear-gradient(180deg, #05060f 0%, #0b1026 50%, #05060f 100%);
}
.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    padding: 5rem 1.5rem;
    text-align: center;
}
.hero__content {
    max-width: 72rem;
    animation: heroIn 1.2s ease-out;
}
.hero__title {
    font-size: clamp(4.5rem, 14vw, 12rem);
    font-weight: 900;
    letter-spacing: -0.05em;
    line-height: 1;
    margin-bottom: 2rem;
    background: linear-gradient(90deg, #facc15, #f97316, #dc2626);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    animation: glow 2s ease-in-out infinite;
}
.hero__edition {
    font-size: clamp(1.8rem, 4vw, 3rem);
    font-weight: 700;
    margin-bottom: 1.5rem;
    text-shadow: 0 0 30px rgba(255, 255, 255, 0.9), 0 0 60px rgba(255, 255, 255, 0.5);
}
.hero__meta {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    margin-bottom: 3rem;
    font-size: 1.25rem;
    color: #e5e7eb;
    font-weight: 600;
}
.hero__sponsor a {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: #fff;
    text-decoration: none;
    transition: transform 0.2s;
}
.hero__sponsor a:hover { transform: scale(1.1); }
.hero__dates { color: #22d3ee; font-weight: 800; }
.hero__prize { color: #facc15; font-weight: 800; }
.highlight {
    color: #facc15;
    font-weight: 800;
}
.cta-button {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1.25rem 3rem;
    border: none;
    border-radius: 999px;
    background: linear-gradient(90deg, #facc15, #f97316);
    color: #000;
    font-size: 1.25rem;
    font-weight: 900;
    cursor: pointer;
    box-shadow: 0 0 30px rgba(250, 204, 21, 0.5);
    transition: transform 0.2s, box-shadow 0.2s;
}
.cta-button:hover {
    transform: scale(1.1);
    box-shadow: 0 0 50px rgba(250, 204, 21, 0.9);
}
.cta-button:active { transform: scale(0.95); }
.cta-button--hero { font-size: 1.5rem; }
.section {
    position: relative;
    max-width: 72rem;
    margin: 0 auto;
    padding: 8rem 1.5rem;
    text-align: center;
}
.section h2 {
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    font-weight: 900;
    margin-bottom: 3rem;
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.gradient-cyan { background: linear-gradient(90deg, #22d3ee, #2563eb); }
.gradient-warm { background: linear-gradient(90deg, #facc15, #ef4444); }
.gradient-cool { background: linear-gradient(90deg, #60a5fa, #9333ea); }
.section__lead {
    max-width: 56rem;
    margin: 0 auto 3rem;
    font-size: 1.5rem;
    line-height: 1.6;
    color: #e5e7eb;
    text-shadow: 0 2px 20px rgba(0, 0, 0, 0.9);
}
.card {
    position: relative;
    padding: 2rem;
    background: rgba(17, 24, 39, 0.6);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    backdrop-filter: blur(10px);
    text-align: left;
    transition: transform 0.3s;
}
.card:hover { transform: translateY(-6px); }
.steps__grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    gap: 2rem;
    margin-bottom: 4rem;
}
.step__num {
    position: absolute;
    top: 1rem;
    right: 1.5rem;
    font-size: 3.5rem;
    font-weight: 900;
    opacity: 0.15;
}
.step h3 { font-size: 1.75rem; font-weight: 900; margin-bottom: 1rem; }
.step p { color: #d1d5db; line-height: 1.6; }
.step--red h3 { color: #f97316; }
.step--yellow h3 { color: #facc15; }
.step--green h3 { color: #4ade80; }
.step--cyan h3 { color: #22d3ee; }
.collapsible {
    max-width: 56rem;
    margin: 0 auto;
    border: 2px solid rgba(249, 115, 22, 0.3);
    border-radius: 1.5rem;
    background: rgba(17, 24, 39, 0.6);
    overflow: hidden;
    text-align: left;
}
.collapsible__header {
    display: flex;
    align-items: center;
    gap: 1rem;
    width: 100%;
    padding: 1.5rem 2rem;
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
    text-align: left;
}
.collapsible__icon { font-size: 2rem; }
.collapsible__titles { flex: 1; }
.collapsible__titles h3 {
    font-size: 1.75rem;
    font-weight: 900;
    color: #fb923c;
}
.collapsible__titles p { color: #9ca3af; }
.collapsible__glyph {
    font-size: 2.5rem;
    font-weight: 300;
    color: #fb923c;
}
.collapsible__body {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
    padding: 0 2rem 2rem;
    font-size: 1.1rem;
    line-height: 1.6;
    color: #e5e7eb;
    animation: fadeIn 0.4s ease-out;
}
.collapsible__quote {
    padding: 1rem 1.5rem;
    border-left: 4px solid #facc15;
    font-style: italic;
    font-weight: 700;
}
.judge__title {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}
.judge__title h2 {
    margin-bottom: 1.5rem;
    background: linear-gradient(90deg, #22d3ee, #3b82f6, #9333ea);
    -webkit-background-clip: text;
}
.judge__icon { font-size: 3rem; }
.judge__features {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 1.5rem;
    margin-bottom: 3rem;
}
.judge__feature p {
    text-align: center;
    font-weight: 800;
    font-size: 1.25rem;
    color: #22d3ee;
}
.outline-button {
    padding: 1rem 2.5rem;
    border: 2px solid #22d3ee;
    border-radius: 999px;
    background: transparent;
    color: #22d3ee;
    font-size: 1.1rem;
    font-weight: 800;
    cursor: pointer;
    transition: background 0.2s, color 0.2s;
}
.outline-button:hover {
    background: #22d3ee;
    color: #000;
}
.judge__details {
    display: grid;
    gap: 2rem;
    margin-top: 3rem;
    animation: fadeIn 0.4s ease-out;
}
.judge__details h4 {
    margin: 1.5rem 0 0.5rem;
    font-size: 1.2rem;
    color: #fff;
}
.judge__details p { color: #d1d5db; line-height: 1.6; }
.judge__heading { font-size: 1.75rem; font-weight: 900; color: #facc15; }
.judge__heading--green { color: #4ade80; }
.judge__note { margin-top: 1.5rem; font-style: italic; }
.benefits__grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
    gap: 1.5rem;
    margin-bottom: 4rem;
}
.benefit {
    display: flex;
    align-items: center;
    gap: 1rem;
    font-weight: 800;
    font-size: 1.1rem;
}
.benefit__icon {
    font-size: 2.25rem;
    animation: wiggle 2s ease-in-out infinite;
}
.internship {
    max-width: 56rem;
    margin: 0 auto;
    border-color: rgba(250, 204, 21, 0.4);
}
.internship h3 { font-size: 2rem; font-weight: 900; color: #facc15; margin-bottom: 1rem; }
.internship__perks {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 1.5rem;
    margin-top: 1.5rem;
    color: #d1d5db;
}
.internship__perk { font-weight: 800; color: #fff; }
.testimonials__grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    gap: 2rem;
}
.testimonial__stars { color: #facc15; letter-spacing: 0.2em; margin-bottom: 1rem; }
.testimonial__text { font-style: italic; color: #e5e7eb; margin-bottom: 1.5rem; line-height: 1.6; }
.testimonial__name { font-weight: 800; color: #22d3ee; }
.testimonial__college { font-size: 0.9rem; color: #9ca3af; }
.objections__sub {
    margin: -2rem 0 3rem;
    font-size: 1.5rem;
    font-weight: 800;
    color: #4ade80;
}
.objections__list {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
    gap: 1.5rem;
    margin-bottom: 4rem;
}
.objection p { line-height: 1.6; color: #d1d5db; }
.objection__doubt { font-weight: 800; color: #fca5a5 !important; }
.objection__answer { font-weight: 800; color: #facc15 !important; margin: 0.75rem 0; }
.objection__cross, .objection__check { margin-right: 0.5rem; }
.bottom-line {
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
    border-color: rgba(250, 204, 21, 0.4);
}
.bottom-line h3 { font-size: 2.5rem; font-weight: 900; color: #facc15; margin-bottom: 1rem; }
.bottom-line p { font-size: 1.25rem; color: #e5e7eb; line-height: 1.6; }
.bottom-line__push { margin: 1.5rem 0 2rem; font-weight: 700; }
.faq__list {
    display: grid;
    gap: 1.25rem;
    max-width: 56rem;
    margin: 0 auto;
}
.faq__item h3 { font-size: 1.4rem; font-weight: 800; color: #22d3ee; margin-bottom: 0.75rem; }
.faq__item p { color: #d1d5db; }
.footer {
    padding: 5rem 1.5rem 3rem;
    text-align: center;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(0, 0, 0, 0.4);
}
.footer h3 {
    font-size: 2.25rem;
    font-weight: 900;
    margin-bottom: 1rem;
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.footer a { color: #22d3ee; }
.footer__club { font-weight: 800; color: #facc15; margin: 1rem 0; }
.footer__contacts {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}
.footer__contact {
    padding: 1rem 1.5rem;
    border: 1px solid rgba(34, 211, 238, 0.3);
    border-radius: 1rem;
    text-decoration: none;
    transition: transform 0.2s;
}
.footer__contact:hover { transform: translateY(-5px); }
.footer__contact-name { font-weight: 800; color: #fff; }
.footer__bottom {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    margin-top: 3rem;
    color: #9ca3af;
}
@keyframes heroIn {
    from { opacity: 0; transform: scale(0.8); }
    to { opacity: 1; transform: scale(1); }
}
@keyframes glow {
    0%, 100% { filter: drop-shadow(0 0 20px rgba(250, 204, 21, 0.5)); }
    50% { filter: drop-shadow(0 0 60px rgba(250, 204, 21, 0.8)); }
}
@keyframes fadeIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes wiggle {
    0%, 100% { transform: rotate(0deg); }
    25% { transform: rotate(5deg); }
    75% { transform: rotate(-5deg); }
}
@media (max-width: 768px) {
    .section { padding: 5rem 1rem; }
    .section__lead { font-size: 1.15rem; }
    .cta-button { padding: 1rem 2rem; font-size: 1.1rem; }
    .collapsible__titles h3 { font-size: 1.3rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_fully_visible_at_top() {
        assert_eq!(hero_opacity(0.0, 5_800.0, 800.0), 1.0);
    }

    #[test]
    fn test_hero_fades_linearly() {
        assert!((hero_opacity(500.0, 5_800.0, 800.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_hero_gone_past_fade_span() {
        assert_eq!(hero_opacity(1_000.0, 5_800.0, 800.0), 0.0);
        assert_eq!(hero_opacity(4_999.0, 5_800.0, 800.0), 0.0);
    }

    #[test]
    fn test_hero_progress_excludes_viewport() {
        // 1000 of 5000 scrollable pixels, not 1000 of the 5800 tall document
        assert_eq!(hero_opacity(1_000.0, 5_800.0, 800.0), 0.0);
        assert!((hero_opacity(250.0, 5_800.0, 800.0) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_hero_clamps_odd_inputs() {
        // Overscroll bounce on mobile reports negative offsets
        assert_eq!(hero_opacity(-40.0, 5_800.0, 800.0), 1.0);
        // Page shorter than the viewport
        assert_eq!(hero_opacity(0.0, 600.0, 800.0), 1.0);
    }
}
