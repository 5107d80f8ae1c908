//! Math Arcade entry point
//!
//! Handles platform-specific initialization and runs the frame loop.
//! The host page declares which game it hosts by the elements it
//! provides: `runner-canvas`, `shooter-canvas`, or `answer-input`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent,
        MouseEvent, TouchEvent,
    };

    use math_arcade::Settings;
    use math_arcade::consts::*;
    use math_arcade::render;
    use math_arcade::sim::quiz::{QuizPhase, QuizState};
    use math_arcade::sim::runner::{RunnerInput, RunnerPhase, RunnerState, runner_tick};
    use math_arcade::sim::shooter::{ShooterInput, ShooterPhase, ShooterState, shooter_tick};

    /// The game the host page provides elements for
    enum ActiveGame {
        Runner {
            state: RunnerState,
            input: RunnerInput,
            ctx: CanvasRenderingContext2d,
        },
        Shooter {
            state: ShooterState,
            input: ShooterInput,
            ctx: CanvasRenderingContext2d,
        },
        Quiz {
            state: QuizState,
        },
    }

    /// Game instance holding all state
    struct Game {
        game: ActiveGame,
        accumulator: f32,
        last_time: f64,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(game: ActiveGame, settings: Settings) -> Self {
            Self {
                game,
                accumulator: 0.0,
                last_time: 0.0,
                settings,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);

            match &mut self.game {
                ActiveGame::Runner { state, input, .. } => {
                    self.accumulator += dt;
                    let mut substeps = 0;
                    while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                        runner_tick(state, input, SIM_DT);
                        self.accumulator -= SIM_DT;
                        substeps += 1;

                        // Clear one-shot inputs after processing
                        input.flip = false;
                        input.pause = false;
                    }
                }
                ActiveGame::Shooter { state, input, .. } => {
                    self.accumulator += dt;
                    let mut substeps = 0;
                    while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                        shooter_tick(state, input, SIM_DT);
                        self.accumulator -= SIM_DT;
                        substeps += 1;

                        input.fire = false;
                        input.pause = false;
                    }
                }
                ActiveGame::Quiz { state } => {
                    // The quiz is a plain countdown; no substepping needed
                    state.tick(dt);
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            match &self.game {
                ActiveGame::Runner { state, ctx, .. } => render::runner::draw(ctx, state),
                ActiveGame::Shooter { state, ctx, .. } => {
                    render::shooter::draw(ctx, state, &self.settings)
                }
                ActiveGame::Quiz { .. } => {} // DOM-only surface
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Score
            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.score().to_string()));
            }

            // FPS counter (optional)
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("hud-fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }

            match &self.game {
                ActiveGame::Runner { state, .. } => {
                    set_overlay(&document, "start-prompt", state.phase == RunnerPhase::Ready);
                    set_overlay(&document, "pause-overlay", state.phase == RunnerPhase::Paused);
                    self.update_game_over(&document, state.phase == RunnerPhase::GameOver);
                }
                ActiveGame::Shooter { state, .. } => {
                    set_overlay(&document, "pause-overlay", state.phase == ShooterPhase::Paused);
                    self.update_game_over(&document, state.phase == ShooterPhase::GameOver);
                }
                ActiveGame::Quiz { state } => {
                    if let Some(el) = document.get_element_by_id("problem-text") {
                        el.set_text_content(Some(&state.problem.text));
                    }
                    if let Some(el) = document.get_element_by_id("formula-hint") {
                        el.set_text_content(Some(&format!("Hint: {}", state.problem.formula)));
                    }
                    // Timer bar width tracks the remaining fraction
                    if let Some(el) = document.get_element_by_id("timer-bar") {
                        if let Ok(bar) = el.dyn_into::<web_sys::HtmlElement>() {
                            let pct = state.timer_fraction() * 100.0;
                            let _ = bar.style().set_property("width", &format!("{pct:.1}%"));
                        }
                    }
                    let over = state.phase == QuizPhase::GameOver;
                    if over {
                        if let Some(el) = document.get_element_by_id("correct-answer") {
                            el.set_text_content(Some(&state.problem.answer.to_string()));
                        }
                        if let Some(input) = answer_input(&document) {
                            input.set_disabled(true);
                        }
                    }
                    self.update_game_over(&document, over);
                }
            }
        }

        fn update_game_over(&self, document: &Document, over: bool) {
            set_overlay(document, "game-over", over);
            if over {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&self.score().to_string()));
                }
            }
        }

        fn score(&self) -> u64 {
            match &self.game {
                ActiveGame::Runner { state, .. } => state.score,
                ActiveGame::Shooter { state, .. } => state.score,
                ActiveGame::Quiz { state } => state.score,
            }
        }

        /// Reset game state for restart
        fn restart(&mut self, seed: u64) {
            self.accumulator = 0.0;
            match &mut self.game {
                ActiveGame::Runner { state, input, .. } => {
                    *state = RunnerState::new(seed);
                    *input = RunnerInput::default();
                }
                ActiveGame::Shooter { state, input, .. } => {
                    *state = ShooterState::new(seed);
                    *input = ShooterInput::default();
                }
                ActiveGame::Quiz { state } => {
                    *state = QuizState::new(seed);
                    let document = web_sys::window().unwrap().document().unwrap();
                    if let Some(input) = answer_input(&document) {
                        input.set_value("");
                        input.set_disabled(false);
                        let _ = input.focus();
                    }
                }
            }
        }
    }

    /// Show or hide an overlay element by toggling the `hidden` class
    fn set_overlay(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let class = if visible { "" } else { "hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    fn answer_input(document: &Document) -> Option<HtmlInputElement> {
        document
            .get_element_by_id("answer-input")?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    /// Read, parse, and check the quiz answer field
    fn submit_answer(game: &Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(input) = answer_input(&document) else {
            return;
        };
        // A non-numeric submission becomes NaN, which fails the epsilon
        // check and ends the game like any other wrong answer
        let value = input.value().trim().parse::<f64>().unwrap_or(f64::NAN);

        let mut g = game.borrow_mut();
        if let ActiveGame::Quiz { state } = &mut g.game {
            let outcome = state.check_answer(value);
            log::debug!("Answer {value}: {outcome:?}");
            input.set_value("");
        }
    }

    /// Set up a fixed-resolution canvas scaled by the device pixel ratio
    fn setup_canvas(canvas: &HtmlCanvasElement, width: f32, height: f32) -> CanvasRenderingContext2d {
        let window = web_sys::window().expect("no window");
        let dpr = window.device_pixel_ratio();
        canvas.set_width((width as f64 * dpr) as u32);
        canvas.set_height((height as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        let _ = ctx.scale(dpr, dpr);
        ctx
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Math Arcade starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        // Pick the game from the elements the page provides
        let mut canvas_el: Option<HtmlCanvasElement> = None;
        let active = if let Some(el) = document.get_element_by_id("runner-canvas") {
            let canvas: HtmlCanvasElement = el.dyn_into().expect("not a canvas");
            let ctx = setup_canvas(&canvas, RUNNER_WIDTH, RUNNER_HEIGHT);
            canvas_el = Some(canvas);
            ActiveGame::Runner {
                state: RunnerState::new(seed),
                input: RunnerInput::default(),
                ctx,
            }
        } else if let Some(el) = document.get_element_by_id("shooter-canvas") {
            let canvas: HtmlCanvasElement = el.dyn_into().expect("not a canvas");
            let ctx = setup_canvas(&canvas, SHOOTER_WIDTH, SHOOTER_HEIGHT);
            canvas_el = Some(canvas);
            ActiveGame::Shooter {
                state: ShooterState::new(seed),
                input: ShooterInput::default(),
                ctx,
            }
        } else if let Some(input) = answer_input(&document) {
            let _ = input.focus();
            ActiveGame::Quiz {
                state: QuizState::new(seed),
            }
        } else {
            log::error!("No game elements found on this page");
            return;
        };

        let game = Rc::new(RefCell::new(Game::new(active, settings)));
        log::info!("Game initialized with seed: {}", seed);

        if let Some(canvas) = canvas_el {
            setup_canvas_input(&canvas, game.clone());
        }
        setup_keyboard(game.clone());
        setup_restart_button(game.clone());
        setup_auto_pause(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Math Arcade running!");
    }

    /// Route a click/tap to the active game's one-shot action
    fn pointer_action(game: &mut ActiveGame) {
        match game {
            ActiveGame::Runner { input, .. } => input.flip = true,
            ActiveGame::Shooter { input, .. } => input.fire = true,
            ActiveGame::Quiz { .. } => {}
        }
    }

    fn setup_canvas_input(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click - flip/fire
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                pointer_action(&mut game.borrow_mut().game);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch - flip/fire
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                pointer_action(&mut game.borrow_mut().game);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Quiz submission is handled outside the borrow below
            if event.key() == "Enter" {
                let is_quiz = matches!(game.borrow().game, ActiveGame::Quiz { .. });
                if is_quiz {
                    submit_answer(&game);
                    return;
                }
            }

            let mut g = game.borrow_mut();
            match &mut g.game {
                ActiveGame::Runner { input, .. } => match event.key().as_str() {
                    " " | "ArrowUp" | "w" | "W" => input.flip = true,
                    "Escape" => input.pause = true,
                    _ => {}
                },
                ActiveGame::Shooter { input, .. } => match event.key().as_str() {
                    " " | "Enter" => input.fire = true,
                    "Escape" => input.pause = true,
                    _ => {}
                },
                ActiveGame::Quiz { .. } => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    pause_if_playing(&game, "tab hidden");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                pause_if_playing(&game, "window blur");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn pause_if_playing(game: &Rc<RefCell<Game>>, reason: &str) {
        let mut g = game.borrow_mut();
        match &mut g.game {
            ActiveGame::Runner { state, input, .. } => {
                if state.phase == RunnerPhase::Playing {
                    input.pause = true;
                    log::info!("Auto-paused ({reason})");
                }
            }
            ActiveGame::Shooter { state, input, .. } => {
                if state.phase == ShooterPhase::Playing {
                    input.pause = true;
                    log::info!("Auto-paused ({reason})");
                }
            }
            // The quiz timer keeps running; pausing it would be a cheat
            ActiveGame::Quiz { .. } => {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Math Arcade (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Run smoke checks
    println!("\nRunning simulation smoke checks...");
    smoke_runner();
    smoke_quiz();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_runner() {
    use math_arcade::consts::{PLAYER_SIZE, RUNNER_HEIGHT, SIM_DT};
    use math_arcade::sim::runner::{RunnerInput, RunnerPhase, RunnerState, runner_tick};

    let mut state = RunnerState::new(12345);
    let start = RunnerInput {
        flip: true,
        ..Default::default()
    };
    runner_tick(&mut state, &start, SIM_DT);
    assert_eq!(state.phase, RunnerPhase::Playing);

    for i in 0..10_000u32 {
        let input = RunnerInput {
            flip: i % 97 == 0,
            ..Default::default()
        };
        runner_tick(&mut state, &input, SIM_DT);
        assert!(state.player.y >= 0.0 && state.player.y <= RUNNER_HEIGHT - PLAYER_SIZE);
        if state.phase == RunnerPhase::GameOver {
            break;
        }
    }
    println!("✓ Runner smoke check passed (score {})", state.score);
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_quiz() {
    use math_arcade::sim::quiz::{AnswerOutcome, QuizState};

    let mut state = QuizState::new(67890);
    for _ in 0..25 {
        let answer = state.problem.answer;
        assert_eq!(state.check_answer(answer), AnswerOutcome::Correct);
    }
    assert_eq!(state.score, 25);
    println!("✓ Quiz smoke check passed (25 correct answers)");
}
