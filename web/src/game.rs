use noughts_core as game;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Everything the board needs to draw one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
struct ViewCell {
    cell: game::Cell,
    winning: bool,
    locked: bool,
}

impl ViewCell {
    fn text(self) -> &'static str {
        self.cell.player().map_or("", game::Player::symbol)
    }

    fn classes(self) -> Classes {
        classes!(
            "square",
            self.cell.player().map(|player| match player {
                game::Player::X => "x",
                game::Player::O => "o",
            }),
            self.winning.then_some("win"),
            self.locked.then_some("locked"),
        )
    }
}

fn view_cells(state: &game::GameState) -> [ViewCell; game::BOARD_CELLS] {
    let winner = state.winner();
    core::array::from_fn(|i| {
        let index = i as game::CellIndex;
        ViewCell {
            cell: state.current_board()[index],
            winning: winner.is_some_and(|win| win.contains(index)),
            locked: !state.can_play_at(index),
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    CellClick(game::CellIndex),
    HistoryClick(usize),
    StateChanged,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    view: ViewCell,
    callback: Callback<game::CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        view,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td><button class={view.classes()} {onclick}>{view.text()}</button></td>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct MoveListProps {
    labels: Vec<game::MoveLabel>,
    current_step: usize,
    callback: Callback<usize>,
}

#[function_component(MoveListView)]
fn move_list_component(props: &MoveListProps) -> Html {
    html! {
        <ol>
            {
                for props.labels.iter().map(|&label| {
                    let step = label.step();
                    let class = (step == props.current_step).then_some("current");
                    let onclick = props.callback.reform(move |_: MouseEvent| step);
                    html! {
                        <li key={step}><button {class} {onclick}>{label.to_string()}</button></li>
                    }
                })
            }
        </ol>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    store: game::GameStore,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut store = game::GameStore::new();
        let link = ctx.link().clone();
        store.subscribe(move |state| {
            log::trace!(
                "state: {}",
                serde_json::to_string(state).unwrap_or_default()
            );
            link.send_message(Msg::StateChanged);
        });
        Self { store }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellClick(index) => {
                match self.store.apply_move(index) {
                    Ok(outcome) => log::debug!("move at {}: {:?}", index, outcome),
                    Err(err) => log::warn!("move at {} rejected: {}", index, err),
                }
                false
            }
            HistoryClick(step) => {
                match self.store.jump_to(step) {
                    Ok(outcome) => log::debug!("jump to {}: {:?}", step, outcome),
                    Err(err) => log::warn!("jump to {} rejected: {}", step, err),
                }
                false
            }
            StateChanged => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.store.state();
        let cells = view_cells(state);
        let status = state.status();
        let status_class = classes!(
            "status",
            match status {
                game::Status::Winner(_) => "winner",
                game::Status::Draw => "draw",
                game::Status::Next(_) => "next",
            }
        );
        let cb_cell = ctx.link().callback(Msg::CellClick);
        let cb_history = ctx.link().callback(Msg::HistoryClick);

        html! {
            <div class="noughts">
                <table class="board">
                    {
                        for cells.chunks(usize::from(game::BOARD_SIDE)).enumerate().map(|(row, chunk)| html! {
                            <tr>
                                {
                                    for chunk.iter().enumerate().map(|(col, &view)| {
                                        let index = (row * usize::from(game::BOARD_SIDE) + col) as game::CellIndex;
                                        let callback = cb_cell.clone();
                                        html! {
                                            <CellView {index} {view} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <aside>
                    <div class={status_class}>{status.to_string()}</div>
                    <MoveListView
                        labels={state.move_labels()}
                        current_step={state.current_step()}
                        callback={cb_history}
                    />
                </aside>
            </div>
        }
    }
}
