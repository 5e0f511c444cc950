//! Sort Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, HtmlInputElement, KeyboardEvent, PointerEvent};

    use sort_rush::audio::AudioManager;
    use sort_rush::catalog::{Catalog, Category, SpecialKind};
    use sort_rush::highscores::HighScores;
    use sort_rush::settings::Settings;
    use sort_rush::sim::{
        BinGeometry, GameEvent, GamePhase, GameState, Item, ItemState, RunSummary, resolve_sort,
        tick,
    };

    fn document() -> Document {
        web_sys::window().expect("no window").document().expect("no document")
    }

    fn element_id(category: Category) -> &'static str {
        match category {
            Category::Nails => "bin-nails",
            Category::Makeup => "bin-makeup",
            Category::Accessories => "bin-accessories",
        }
    }

    /// Reads the live bin element rects and converts them to the sim's
    /// normalized percent coordinates.
    struct DomBins;

    impl BinGeometry for DomBins {
        fn bin_anchor(&self, category: Category) -> Vec2 {
            let doc = document();
            let area_rect = doc
                .get_element_by_id("play-area")
                .map(|el| el.get_bounding_client_rect());
            let bin_rect = doc
                .get_element_by_id(element_id(category))
                .map(|el| el.get_bounding_client_rect());

            if let (Some(area), Some(bin)) = (area_rect, bin_rect) {
                if area.width() > 0.0 && area.height() > 0.0 {
                    let x = ((bin.left() + bin.width() / 2.0 - area.left()) / area.width()) * 100.0;
                    let y = ((bin.top() + bin.height() / 3.0 - area.top()) / area.height()) * 100.0;
                    return Vec2::new(x as f32, y as f32);
                }
            }
            // bins not measurable yet: aim at the bottom center
            Vec2::new(50.0, 100.0)
        }
    }

    /// A transient DOM element with a lifetime, removed when it expires
    struct FloatingFx {
        el: Element,
        ttl_ms: f32,
    }

    /// A CSS class applied for a bounded time
    struct ClassFx {
        el: Element,
        class: &'static str,
        ttl_ms: f32,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        audio: AudioManager,
        settings: Settings,
        highscores: HighScores,
        last_time: f64,
        floats: Vec<FloatingFx>,
        class_fx: Vec<ClassFx>,
        flash_ms: f32,
        shake_ms: f32,
        summary: Option<RunSummary>,
    }

    impl Game {
        fn new(catalog: Catalog, seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_muted(settings.muted);
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            let mut state = GameState::new(catalog, seed);
            state.set_muted(settings.muted);
            Self {
                state,
                audio,
                settings,
                highscores: HighScores::load(),
                last_time: 0.0,
                floats: Vec::new(),
                class_fx: Vec::new(),
                flash_ms: 0.0,
                shake_ms: 0.0,
                summary: None,
            }
        }

        /// Reset for a fresh run, keeping preferences and leaderboard
        fn restart(&mut self, seed: u64) {
            let catalog = self.state.catalog().clone();
            self.state = GameState::new(catalog, seed);
            self.state.set_muted(self.settings.muted);
            self.last_time = 0.0;
            self.flash_ms = 0.0;
            self.shake_ms = 0.0;
            self.summary = None;
            for fx in self.floats.drain(..) {
                fx.el.remove();
            }
            self.class_fx.clear();
        }

        /// One animation frame: advance the sim and repaint
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time) as f32
            } else {
                16.0
            };
            self.last_time = time;

            tick(&mut self.state, dt);

            for event in self.state.drain_events() {
                self.apply_event(event);
            }

            self.advance_fx(dt);
            self.render_items();
            self.update_hud();
        }

        /// Map one sim event to audio and DOM feedback
        fn apply_event(&mut self, event: GameEvent) {
            match event {
                GameEvent::Sound(cue) => self.audio.play(cue),
                GameEvent::ScoreDelta { points, at } => {
                    self.spawn_float(&format!("+{points}"), at, "float-score");
                }
                GameEvent::LevelUp { level } => {
                    self.spawn_float(&format!("NIVEL {level}!"), Vec2::new(50.0, 40.0), "float-level");
                }
                GameEvent::DamageFlash => self.flash_ms = 200.0,
                GameEvent::ScreenShake => {
                    if self.settings.effective_screen_shake() {
                        self.shake_ms = 300.0;
                    }
                }
                GameEvent::Confetti { at, golden } => {
                    if self.settings.effective_confetti() {
                        self.spawn_confetti(at, golden);
                    }
                }
                GameEvent::BinBump { category } => {
                    self.push_class_fx(element_id(category), "bump", 150.0);
                }
                GameEvent::VoucherGlow { category } => {
                    self.push_class_fx(element_id(category), "voucher-glow", 1000.0);
                }
                GameEvent::ExtraLife { at } => {
                    self.spawn_float("+1 VIAȚĂ!", at, "float-heart");
                }
                GameEvent::SlowTime { at } => {
                    self.spawn_float("SLOW TIME!", at, "float-clock");
                }
                GameEvent::ItemLost { at } => {
                    self.spawn_float("RATAT", at, "float-miss");
                }
                GameEvent::SessionEnded(summary) => {
                    self.summary = Some(summary);
                }
            }
        }

        fn spawn_float(&mut self, text: &str, at: Vec2, class: &str) {
            let doc = document();
            let Some(area) = doc.get_element_by_id("play-area") else {
                return;
            };
            let Ok(el) = doc.create_element("div") else {
                return;
            };
            let _ = el.set_attribute("class", &format!("floating {class}"));
            el.set_text_content(Some(text));
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let style = html.style();
                let _ = style.set_property("left", &format!("{}%", at.x));
                let _ = style.set_property("top", &format!("{}%", at.y));
            }
            let _ = area.append_child(&el);
            self.floats.push(FloatingFx { el, ttl_ms: 1000.0 });
        }

        fn spawn_confetti(&mut self, at: Vec2, golden: bool) {
            let doc = document();
            let Some(area) = doc.get_element_by_id("play-area") else {
                return;
            };
            let classes: &[&str] = if golden {
                &["confetti-gold", "confetti-white"]
            } else {
                &["confetti-red", "confetti-gold", "confetti-green", "confetti-white"]
            };
            for i in 0..8u32 {
                let Ok(el) = doc.create_element("div") else {
                    continue;
                };
                let class = classes[i as usize % classes.len()];
                let _ = el.set_attribute("class", &format!("confetti {class} confetti-{i}"));
                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    let style = html.style();
                    let _ = style.set_property("left", &format!("{}%", at.x));
                    let _ = style.set_property("top", &format!("{}%", at.y));
                }
                let _ = area.append_child(&el);
                self.floats.push(FloatingFx { el, ttl_ms: 600.0 });
            }
        }

        fn push_class_fx(&mut self, id: &str, class: &'static str, ttl_ms: f32) {
            let Some(el) = document().get_element_by_id(id) else {
                return;
            };
            let _ = el.class_list().add_1(class);
            self.class_fx.push(ClassFx { el, class, ttl_ms });
        }

        /// Age out transient effects
        fn advance_fx(&mut self, dt: f32) {
            for fx in &mut self.floats {
                fx.ttl_ms -= dt;
            }
            self.floats.retain(|fx| {
                if fx.ttl_ms <= 0.0 {
                    fx.el.remove();
                    false
                } else {
                    true
                }
            });

            for fx in &mut self.class_fx {
                fx.ttl_ms -= dt;
            }
            self.class_fx.retain(|fx| {
                if fx.ttl_ms <= 0.0 {
                    let _ = fx.el.class_list().remove_1(fx.class);
                    false
                } else {
                    true
                }
            });

            if self.flash_ms > 0.0 {
                self.flash_ms -= dt;
            }
            if self.shake_ms > 0.0 {
                self.shake_ms -= dt;
            }

            let doc = document();
            if let Some(el) = doc.get_element_by_id("damage-flash") {
                let _ = el.set_attribute(
                    "class",
                    if self.flash_ms > 0.0 { "active" } else { "" },
                );
            }
            if let Some(el) = doc.get_element_by_id("play-area") {
                if self.shake_ms > 0.0 {
                    let _ = el.class_list().add_1("shake");
                } else {
                    let _ = el.class_list().remove_1("shake");
                }
            }
        }

        /// Paint the item cards: create missing nodes, update live ones,
        /// sweep the rest.
        fn render_items(&self) {
            let doc = document();
            let Some(area) = doc.get_element_by_id("play-area") else {
                return;
            };

            for item in &self.state.items {
                let dom_id = format!("item-{}", item.id);
                let el = match doc.get_element_by_id(&dom_id) {
                    Some(el) => el,
                    None => {
                        let Ok(el) = doc.create_element("div") else {
                            continue;
                        };
                        let _ = el.set_attribute("id", &dom_id);
                        el.set_inner_html(&card_markup(item));
                        let _ = area.append_child(&el);
                        el
                    }
                };

                let mut class = String::from("item-card");
                match item.state {
                    ItemState::Falling => {}
                    ItemState::Sorted { .. } => class.push_str(" sorted"),
                    ItemState::Missed => class.push_str(" missed"),
                }
                if self.state.locked_target == Some(item.id) && item.is_falling() {
                    class.push_str(" target");
                }
                let _ = el.set_attribute("class", &class);

                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    let style = html.style();
                    let _ = style.set_property("left", &format!("{}%", item.pos.x));
                    let _ = style.set_property("top", &format!("{}%", item.pos.y));
                    let _ = style.set_property(
                        "transform",
                        &format!("translate(-50%, -50%) rotate({}deg)", item.rotation),
                    );
                }
            }

            // sweep nodes whose items left the arena
            if let Ok(nodes) = area.query_selector_all(".item-card") {
                for idx in 0..nodes.length() {
                    let Some(node) = nodes.get(idx) else { continue };
                    let Some(el) = node.dyn_ref::<Element>() else {
                        continue;
                    };
                    let alive = el
                        .id()
                        .strip_prefix("item-")
                        .and_then(|s| s.parse::<u32>().ok())
                        .is_some_and(|id| self.state.item(id).is_some());
                    if !alive {
                        el.remove();
                    }
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let doc = document();

            if let Some(el) = doc.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = doc.query_selector("#hud-level .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.level.to_string()));
            }

            // lives as hearts
            if let Some(el) = doc.query_selector("#hud-lives .hud-value").ok().flatten() {
                let hearts: String = (0..3u8)
                    .map(|i| if i < self.state.lives { '❤' } else { '🖤' })
                    .collect();
                el.set_text_content(Some(&hearts));
            }

            // combo shows from a 3-streak up
            if let Some(el) = doc.get_element_by_id("hud-combo") {
                if self.state.streak > 2 {
                    let _ = el.set_attribute("class", "hud-item");
                    if let Some(val) = doc.query_selector("#hud-combo .hud-value").ok().flatten() {
                        val.set_text_content(Some(&format!("{}x COMBO", self.state.streak)));
                    }
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // slowdown badge
            if let Some(el) = doc.get_element_by_id("slow-badge") {
                let _ = el.set_attribute(
                    "class",
                    if self.state.slowdown_active() { "" } else { "hidden" },
                );
            }

            // bin fill meters
            for category in Category::ALL {
                let selector = format!("#{} .bin-fill", element_id(category));
                if let Some(el) = doc.query_selector(&selector).ok().flatten() {
                    if let Some(html) = el.dyn_ref::<HtmlElement>() {
                        let _ = html
                            .style()
                            .set_property("height", &format!("{}%", self.state.bin_fills.get(category)));
                    }
                }
            }

            // pause overlay
            if let Some(el) = doc.get_element_by_id("pause-menu") {
                let _ = el.set_attribute(
                    "class",
                    if self.state.phase == GamePhase::Paused { "" } else { "hidden" },
                );
            }
        }

        /// Fill and reveal the game-over panel
        fn show_game_over(&self) {
            let doc = document();
            let Some(summary) = &self.summary else { return };

            if let Some(el) = doc.get_element_by_id("final-score") {
                el.set_text_content(Some(&summary.final_score.to_string()));
            }
            if let Some(el) = doc.get_element_by_id("final-streak") {
                el.set_text_content(Some(&summary.best_streak.to_string()));
            }
            if let Some(list) = doc.get_element_by_id("collected-list") {
                list.set_inner_html("");
                for collected in summary.collected_items.iter().take(6) {
                    if let Ok(li) = doc.create_element("li") {
                        let icon = match collected.product.special {
                            Some(SpecialKind::Voucher) => "🎫",
                            _ => collected.product.category.icon(),
                        };
                        li.set_text_content(Some(&format!(
                            "{icon} {} x{}",
                            collected.product.name, collected.count
                        )));
                        let _ = list.append_child(&li);
                    }
                }
            }
            self.render_leaderboard();
            if let Some(el) = doc.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", "");
            }
        }

        fn render_leaderboard(&self) {
            let doc = document();
            let Some(list) = doc.get_element_by_id("leaderboard") else {
                return;
            };
            list.set_inner_html("");
            for entry in &self.highscores.entries {
                if let Ok(li) = doc.create_element("li") {
                    li.set_text_content(Some(&format!("{} - {}", entry.name, entry.score)));
                    let _ = list.append_child(&li);
                }
            }
        }

        fn submit_score(&mut self) {
            let Some(summary) = &self.summary else { return };
            let doc = document();
            let name = doc
                .get_element_by_id("player-name")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .unwrap_or_default();
            if name.trim().is_empty() {
                return;
            }
            let rank = self.highscores.add_score(
                &name,
                summary.final_score,
                summary.best_streak,
                js_sys::Date::now(),
            );
            if let Some(rank) = rank {
                log::info!("score {} saved at rank {rank}", summary.final_score);
            }
            self.highscores.save();
            self.render_leaderboard();
        }

        fn sort_into(&mut self, category: Category) {
            self.audio.resume();
            resolve_sort(&mut self.state, category, &DomBins);
        }

        fn toggle_pause(&mut self) {
            match self.state.phase {
                GamePhase::Playing => self.state.pause(),
                GamePhase::Paused => self.state.resume(),
                GamePhase::GameOver => {}
            }
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.settings.save();
            self.state.set_muted(self.settings.muted);
            self.audio.set_muted(self.settings.muted);
            if let Some(el) = document().get_element_by_id("mute-btn") {
                el.set_text_content(Some(if self.settings.muted { "🔇" } else { "🔊" }));
            }
        }
    }

    /// Markup for a product card; built once at spawn
    fn card_markup(item: &Item) -> String {
        let product = &item.product;
        let icon = match product.special {
            Some(SpecialKind::Voucher) => "🎫".to_string(),
            Some(SpecialKind::Heart) => "❤".to_string(),
            Some(SpecialKind::Clock) => "⏰".to_string(),
            None if !product.image_url.is_empty() => {
                format!("<img src=\"{}\" alt=\"\">", product.image_url)
            }
            None => product.category.icon().to_string(),
        };
        format!(
            "<span class=\"item-icon\">{icon}</span><span class=\"item-name\">{}</span>",
            product.name
        )
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sort Rush starting...");

        let catalog = load_catalog();
        log::info!(
            "campaign '{}' with {} products",
            catalog.title,
            catalog.len()
        );

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(catalog, seed)));
        log::info!("Game initialized with seed: {seed}");

        // Hide loading indicator
        if let Some(loading) = document().get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Sort Rush running!");
    }

    /// Campaign JSON may be embedded in the page; otherwise use the
    /// built-in fallback set.
    fn load_catalog() -> Catalog {
        let embedded = document()
            .get_element_by_id("campaign-data")
            .and_then(|el| el.text_content());
        if let Some(json) = embedded {
            match Catalog::from_json(&json) {
                Ok(catalog) if !catalog.is_empty() => return catalog,
                Ok(_) => log::warn!("embedded campaign has no products, using fallback"),
                Err(err) => log::warn!("embedded campaign is invalid ({err}), using fallback"),
            }
        }
        Catalog::fallback()
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.sort_into(Category::Nails),
                    "ArrowDown" | "s" | "S" | "ArrowUp" | "w" | "W" => {
                        g.sort_into(Category::Makeup)
                    }
                    "ArrowRight" | "d" | "D" => g.sort_into(Category::Accessories),
                    "Escape" | "p" | "P" => g.toggle_pause(),
                    "m" | "M" => g.toggle_mute(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer zones: left/middle/right third of the screen
        for (zone, category) in [
            ("zone-nails", Category::Nails),
            ("zone-makeup", Category::Makeup),
            ("zone-accessories", Category::Accessories),
        ] {
            let Some(el) = document().get_element_by_id(zone) else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                game.borrow_mut().sort_into(category);
            });
            let _ =
                el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let doc = document();

        if let Some(btn) = doc.get_element_by_id("mute-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().toggle_mute();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = doc.get_element_by_id("resume-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.resume();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = doc.get_element_by_id("save-score-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().submit_score();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = doc.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
                let doc = document();
                if let Some(el) = doc.get_element_by_id("game-over") {
                    let _ = el.set_attribute("class", "hidden");
                }
                log::info!("Game restarted with seed: {seed}");
                // the previous loop ended with the session; start a new one
                request_animation_frame(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let doc = document();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let doc_clone = doc.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if doc_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().state.pause();
                    log::info!("Auto-paused (tab hidden)");
                }
            });
            let _ = doc.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().state.pause();
                log::info!("Auto-paused (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
        let over = {
            let mut g = game.borrow_mut();
            g.frame(time);
            if g.state.is_over() {
                g.show_game_over();
                true
            } else {
                false
            }
        };

        // the loop self-terminates the moment the session ends; restart
        // starts a fresh chain
        if !over {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use sort_rush::catalog::{Catalog, Category};
    use sort_rush::sim::{BinGeometry, GameState, resolve_sort, tick};

    env_logger::init();
    log::info!("Sort Rush (native) starting...");
    log::info!("Native mode is a headless smoke run - use `trunk serve` for the web version");

    struct FixedBins;

    impl BinGeometry for FixedBins {
        fn bin_anchor(&self, category: Category) -> Vec2 {
            let x = match category {
                Category::Nails => 20.0,
                Category::Makeup => 50.0,
                Category::Accessories => 80.0,
            };
            Vec2::new(x, 92.0)
        }
    }

    let mut state = GameState::new(Catalog::fallback(), 42);
    let mut elapsed_ms = 0.0f64;
    let mut since_sort_ms = 0.0f32;

    // drive the engine with a simple bot: one correct sort every 900 ms
    while !state.is_over() && elapsed_ms < 60_000.0 {
        tick(&mut state, 16.0);
        state.drain_events();
        elapsed_ms += 16.0;
        since_sort_ms += 16.0;

        if since_sort_ms >= 900.0 {
            since_sort_ms = 0.0;
            let category = state
                .locked_target
                .and_then(|id| state.item(id))
                .map(|item| item.product.category);
            if let Some(category) = category {
                resolve_sort(&mut state, category, &FixedBins);
                state.drain_events();
            }
        }
    }

    let summary = state.summary();
    log::info!(
        "smoke run done after {:.1}s: score={} level={} best_streak={} game_over={}",
        elapsed_ms / 1000.0,
        summary.final_score,
        state.level,
        summary.best_streak,
        state.is_over()
    );
    println!(
        "Final score: {} (best streak {})",
        summary.final_score, summary.best_streak
    );
}
