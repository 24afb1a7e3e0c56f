use yew::prelude::*;

/// Count owned by a single widget instance. Only ever moves forward,
/// one step per activation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CounterState {
    count: u32,
}

impl CounterState {
    pub fn new() -> Self {
        CounterState { count: 0 }
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Text shown as the widget's button label.
    pub fn label(&self) -> String {
        format!("count is {}", self.count)
    }
}

pub struct Counter {
    state: CounterState,
}

pub enum Msg {
    Increment,
}

impl Component for Counter {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Counter { state: CounterState::new() }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Increment => {
                self.state.increment();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_| Msg::Increment);
        html! {
            <button type="button" {onclick}>{ self.state.label() }</button>
        }
    }
}
