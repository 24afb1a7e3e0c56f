use yew::prelude::*;
use crate::components::counter::Counter;


#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main>
            <h1>{ "counter-app" }</h1>
            <div class="card">
                <Counter />
            </div>
            <p class="read-the-docs">{ "Click the button to bump the count" }</p>
        </main>
    }
}
