use yew::prelude::*;

pub const PAGE_TITLE: &str = "Operation Engine user interface!";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app">
            <h1>{PAGE_TITLE}</h1>
            {for props.children.iter()}
        </div>
    }
}
