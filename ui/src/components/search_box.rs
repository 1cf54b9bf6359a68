use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub query: AttrValue,
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component]
pub fn SearchBox(props: &SearchBoxProps) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <input
            type="search"
            value={props.query.clone()}
            oninput={on_input}
            placeholder={props.placeholder.clone()}
            class="w-full sm:w-72 px-3 py-2 border border-neutral-300 rounded-md \
                   shadow-sm focus:outline-none focus:ring-2 focus:ring-neutral-500"
        />
    }
}
