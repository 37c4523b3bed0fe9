//! Recipe detail page: two independent document lookups plus a
//! viewport-driven carousel layout.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Carousel, Loading, StatCard, Toasts};
use crate::load::{derive_phase, CancelToken, FetchSlot, LoadPhase, Part};
use crate::model::{Author, Recipe};
use crate::notify::{ToastAction, ToastBag};
use crate::store::{self, StoreError};
use crate::viewport::{tiles_for_width, use_viewport, WindowViewport};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RecipePageProps {
    pub recipe_id: String,
    pub user_id: String,
}

#[function_component(RecipePage)]
pub fn recipe_page(props: &RecipePageProps) -> Html {
    let started = use_state(|| false);
    let recipe_slot = use_state(|| FetchSlot::<Recipe>::Pending);
    let author_slot = use_state(|| FetchSlot::<Author>::Pending);
    let toasts = use_reducer(ToastBag::new);

    let viewport = use_viewport(Rc::new(WindowViewport));
    let tiles = tiles_for_width(viewport.width);

    // Both lookups run concurrently; re-issued only when the route ids
    // change. The token lets a fetch that resolves after unmount drop its
    // result on the floor.
    {
        let started = started.clone();
        let recipe_slot = recipe_slot.clone();
        let author_slot = author_slot.clone();
        let toasts = toasts.clone();

        use_effect_with(
            (props.recipe_id.clone(), props.user_id.clone()),
            move |(recipe_id, user_id)| {
                recipe_slot.set(FetchSlot::Pending);
                author_slot.set(FetchSlot::Pending);
                started.set(true);

                let token = CancelToken::new();

                {
                    let token = token.clone();
                    let recipe_slot = recipe_slot.clone();
                    let toasts = toasts.clone();
                    let recipe_id = recipe_id.clone();
                    spawn_local(async move {
                        let result = store::load_recipe(&recipe_id).await;
                        if token.is_cancelled() {
                            return;
                        }
                        match result {
                            Ok(recipe) => recipe_slot.set(FetchSlot::Loaded(recipe)),
                            Err(StoreError::NotFound) => {
                                recipe_slot.set(FetchSlot::Missing);
                                toasts.dispatch(ToastAction::Push("Recipe not found".into()));
                            }
                            Err(err) => {
                                gloo::console::error!(format!("recipe fetch failed: {err}"));
                                recipe_slot.set(FetchSlot::Failed);
                                toasts.dispatch(ToastAction::Push("Could not fetch recipe".into()));
                            }
                        }
                    });
                }

                {
                    let token = token.clone();
                    let author_slot = author_slot.clone();
                    let toasts = toasts.clone();
                    let user_id = user_id.clone();
                    spawn_local(async move {
                        let result = store::load_author(&user_id).await;
                        if token.is_cancelled() {
                            return;
                        }
                        match result {
                            Ok(author) => author_slot.set(FetchSlot::Loaded(author)),
                            Err(StoreError::NotFound) => {
                                author_slot.set(FetchSlot::Missing);
                                toasts.dispatch(ToastAction::Push("Author not found".into()));
                            }
                            Err(err) => {
                                gloo::console::error!(format!("author fetch failed: {err}"));
                                author_slot.set(FetchSlot::Failed);
                                toasts.dispatch(ToastAction::Push("Could not fetch author".into()));
                            }
                        }
                    });
                }

                move || token.cancel()
            },
        );
    }

    let phase = derive_phase(*started, &recipe_slot, &author_slot);
    let content = match (phase, &*recipe_slot, &*author_slot) {
        (LoadPhase::Ready, FetchSlot::Loaded(recipe), FetchSlot::Loaded(author)) => {
            ready_view(recipe, author, tiles, &props.user_id)
        }
        (LoadPhase::Failed(part), _, _) => failed_view(part),
        _ => html! { <Loading caption="Fetching recipe…" /> },
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <>
            <Toasts toasts={toasts.toasts().to_vec()} {on_dismiss} />
            { content }
        </>
    }
}

fn failed_view(part: Part) -> Html {
    html! {
        <div class="card error">
            <h1>{ "Something went wrong" }</h1>
            <p>{ format!("Could not load the {}.", part.describes()) }</p>
        </div>
    }
}

fn ready_view(recipe: &Recipe, author: &Author, tiles: u32, user_id: &str) -> Html {
    let steps = direction_steps(&recipe.directions);
    let last = steps.len().saturating_sub(1);

    html! {
        <div class="recipe">
            <div class="byline">
                <Link<Route> to={Route::Account { user_id: user_id.to_string() }}>
                    <span class="avatar">
                        <img src={author.avatar.clone()} alt={author.name.clone()} />
                    </span>
                </Link<Route>>
                <span class="author">{ &author.name }</span>
            </div>

            <h1 class="title">{ &recipe.name }</h1>
            <div class="teaser">{ &recipe.teaser }</div>

            <Carousel images={recipe.image_urls.clone()} {tiles} />

            <div class="stats">
                <StatCard label="Prep Time" value={recipe.prep_time.clone()} />
                <StatCard label="Cook Time" value={recipe.cook_time.clone()} />
            </div>

            <h2>{ "Description" }</h2>
            <div class="card">
                <p>{ &recipe.description }</p>
            </div>

            <h2>{ "Ingredients" }</h2>
            <ul class="ingredients">
                { for ingredient_items(&recipe.ingredients) }
            </ul>

            <h2>{ "Directions" }</h2>
            <div class="card directions">
                { for steps.iter().enumerate().map(|(i, (label, text))| html! {
                    <>
                        <div class="step-label">{ label }</div>
                        <p class="step-text">{ text }</p>
                        if i != last {
                            <hr class="divider" />
                        }
                    </>
                }) }
            </div>
        </div>
    }
}

/// One list item per ingredient, in order.
fn ingredient_items(ingredients: &[String]) -> Vec<Html> {
    ingredients
        .iter()
        .map(|ingredient| {
            html! {
                <li class="ingredient"><span>{ ingredient }</span></li>
            }
        })
        .collect()
}

/// 1-based `Step {n}` labels paired with each direction, in order.
fn direction_steps(directions: &[String]) -> Vec<(String, String)> {
    directions
        .iter()
        .enumerate()
        .map(|(i, step)| (format!("Step {}", i + 1), step.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_labeled_block_per_direction() {
        let directions = vec![
            "Marinate.".to_string(),
            "Braise.".to_string(),
            "Serve.".to_string(),
        ];
        let steps = direction_steps(&directions);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], ("Step 1".to_string(), "Marinate.".to_string()));
        assert_eq!(steps[2].0, "Step 3");
    }

    #[test]
    fn no_directions_means_no_blocks() {
        assert!(direction_steps(&[]).is_empty());
    }

    #[test]
    fn one_list_item_per_ingredient() {
        let ingredients = vec![
            "chicken".to_string(),
            "soy sauce".to_string(),
            "vinegar".to_string(),
        ];
        assert_eq!(ingredient_items(&ingredients).len(), 3);
        assert!(ingredient_items(&[]).is_empty());
    }
}
