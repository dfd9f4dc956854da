use yew::prelude::*;

/// Card with a header image above its body.
#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub logo: AttrValue,
    pub alt: AttrValue,
    pub children: Children,
}

#[function_component(Panel)]
pub fn panel(props: &PanelProps) -> Html {
    html! {
        <div class="card">
            <img class="card-img-top" src={props.logo.clone()} alt={props.alt.clone()} />
            <div class="card-body">
                {for props.children.iter()}
            </div>
        </div>
    }
}
