use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Actions a screen can receive from input
///
/// This enum represents all high-level actions the screens understand. It
/// decouples raw SDL2 events from screen logic so the screens can be driven
/// directly in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    // === Navigation ===
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    Confirm,
    Cancel,

    // === Fighting ===
    BlockPressed,
    BlockReleased,
    ChargePressed,
    ChargeReleased,

    // === System ===
    Quit,
}

/// Input context determines which actions are available
///
/// Each screen installs its own context before polling so that, for example,
/// Space means "block" during a fight but is ignored at the end-of-round
/// prompt where a held key would skip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Main menu: Up/Down/Confirm
    Menu,
    /// Character carousel: Left/Right/Confirm/Cancel
    CharacterSelect,
    /// Live round: block/charge press and release, Cancel
    Fighting,
    /// End-of-round prompt: Confirm/Cancel only
    RoundEnd,
    /// Interlude text: Confirm/Cancel
    Cutscene,
}

/// InputSystem translates SDL2 events into ScreenActions
///
/// One instance lives in the app context for the whole program. Screens set
/// the context on entry (and the fight level switches it when the round
/// ends), then poll once per frame.
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Drains all pending events and returns the actions for this frame.
    ///
    /// Events translate oldest first, except that a window-close request is
    /// moved to the front: quitting outranks anything else pressed in the
    /// same frame.
    pub fn poll_actions(&self, event_pump: &mut EventPump) -> Vec<ScreenAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(ScreenAction::Quit);
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    self.handle_keydown(key, &mut actions);
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    self.handle_keyup(key, &mut actions);
                }
                _ => {
                    // Ignore other event types
                }
            }
        }

        promote_quit(&mut actions);
        actions
    }

    /// Routes key presses to the context-specific handler.
    fn handle_keydown(&self, key: Keycode, actions: &mut Vec<ScreenAction>) {
        match self.context {
            InputContext::Menu => self.handle_menu_keys(key, actions),
            InputContext::CharacterSelect => self.handle_select_keys(key, actions),
            InputContext::Fighting => self.handle_fighting_keys(key, actions),
            InputContext::RoundEnd => self.handle_prompt_keys(key, actions),
            InputContext::Cutscene => self.handle_prompt_keys(key, actions),
        }
    }

    /// Key releases only matter mid-fight, for letting go of block/charge.
    fn handle_keyup(&self, key: Keycode, actions: &mut Vec<ScreenAction>) {
        if self.context != InputContext::Fighting {
            return;
        }
        match key {
            Keycode::Space => actions.push(ScreenAction::BlockReleased),
            Keycode::LShift => actions.push(ScreenAction::ChargeReleased),
            _ => {}
        }
    }

    fn handle_menu_keys(&self, key: Keycode, actions: &mut Vec<ScreenAction>) {
        match key {
            Keycode::Up => actions.push(ScreenAction::MenuUp),
            Keycode::Down => actions.push(ScreenAction::MenuDown),
            Keycode::Return | Keycode::Space => actions.push(ScreenAction::Confirm),
            _ => {
                // The menu has no cancel; leaving goes through the EXIT item
            }
        }
    }

    fn handle_select_keys(&self, key: Keycode, actions: &mut Vec<ScreenAction>) {
        match key {
            Keycode::Left => actions.push(ScreenAction::MenuLeft),
            Keycode::Right => actions.push(ScreenAction::MenuRight),
            Keycode::Return => actions.push(ScreenAction::Confirm),
            Keycode::Escape => actions.push(ScreenAction::Cancel),
            _ => {}
        }
    }

    fn handle_fighting_keys(&self, key: Keycode, actions: &mut Vec<ScreenAction>) {
        match key {
            Keycode::Space => actions.push(ScreenAction::BlockPressed),
            Keycode::LShift => actions.push(ScreenAction::ChargePressed),
            Keycode::Escape => actions.push(ScreenAction::Cancel),
            _ => {}
        }
    }

    /// Shared by the end-of-round prompt and the cutscene: a bare
    /// confirm/cancel choice. Only Return confirms here so that a key still
    /// held from the fight cannot skip the prompt.
    fn handle_prompt_keys(&self, key: Keycode, actions: &mut Vec<ScreenAction>) {
        match key {
            Keycode::Return => actions.push(ScreenAction::Confirm),
            Keycode::Escape => actions.push(ScreenAction::Cancel),
            _ => {}
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Moves a window-close action ahead of everything else from the same frame.
fn promote_quit(actions: &mut Vec<ScreenAction>) {
    if let Some(position) = actions.iter().position(|a| *a == ScreenAction::Quit) {
        if position > 0 {
            actions.remove(position);
            actions.insert(0, ScreenAction::Quit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_system_starts_in_menu() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Menu);
    }

    #[test]
    fn test_menu_key_translation() {
        let input = InputSystem::new();
        let mut actions = Vec::new();

        input.handle_keydown(Keycode::Up, &mut actions);
        input.handle_keydown(Keycode::Down, &mut actions);
        input.handle_keydown(Keycode::Return, &mut actions);
        assert_eq!(
            actions,
            vec![
                ScreenAction::MenuUp,
                ScreenAction::MenuDown,
                ScreenAction::Confirm
            ]
        );

        // Escape does nothing on the main menu
        actions.clear();
        input.handle_keydown(Keycode::Escape, &mut actions);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_select_key_translation() {
        let mut input = InputSystem::new();
        input.set_context(InputContext::CharacterSelect);
        let mut actions = Vec::new();

        input.handle_keydown(Keycode::Left, &mut actions);
        input.handle_keydown(Keycode::Right, &mut actions);
        input.handle_keydown(Keycode::Escape, &mut actions);
        assert_eq!(
            actions,
            vec![
                ScreenAction::MenuLeft,
                ScreenAction::MenuRight,
                ScreenAction::Cancel
            ]
        );
    }

    #[test]
    fn test_fighting_keys_press_and_release() {
        let mut input = InputSystem::new();
        input.set_context(InputContext::Fighting);
        let mut actions = Vec::new();

        input.handle_keydown(Keycode::Space, &mut actions);
        input.handle_keydown(Keycode::LShift, &mut actions);
        input.handle_keyup(Keycode::Space, &mut actions);
        input.handle_keyup(Keycode::LShift, &mut actions);
        assert_eq!(
            actions,
            vec![
                ScreenAction::BlockPressed,
                ScreenAction::ChargePressed,
                ScreenAction::BlockReleased,
                ScreenAction::ChargeReleased
            ]
        );
    }

    #[test]
    fn test_round_end_ignores_block_keys() {
        let mut input = InputSystem::new();
        input.set_context(InputContext::RoundEnd);
        let mut actions = Vec::new();

        input.handle_keydown(Keycode::Space, &mut actions);
        input.handle_keyup(Keycode::Space, &mut actions);
        assert!(actions.is_empty());

        input.handle_keydown(Keycode::Return, &mut actions);
        input.handle_keydown(Keycode::Escape, &mut actions);
        assert_eq!(actions, vec![ScreenAction::Confirm, ScreenAction::Cancel]);
    }

    #[test]
    fn test_quit_is_promoted_to_front() {
        let mut actions = vec![
            ScreenAction::MenuDown,
            ScreenAction::Confirm,
            ScreenAction::Quit,
        ];
        promote_quit(&mut actions);
        assert_eq!(
            actions,
            vec![
                ScreenAction::Quit,
                ScreenAction::MenuDown,
                ScreenAction::Confirm
            ]
        );
    }
}
