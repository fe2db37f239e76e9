//! # Storefront Shell
//!
//! Line-oriented front end over the commands.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line ──► ShellCommand::from_str ──► Shell::execute ──► Reply     │
//! │                        │                         │                      │
//! │                        ▼                         ▼                      │
//! │                 UNKNOWN_COMMAND /           commands::* with the        │
//! │                 VALIDATION_ERROR            states they need            │
//! │                                                                         │
//! │  Reply::Text(..) is printed, Reply::Quit ends the session.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;
use std::str::FromStr;

use gebeta_core::{Category, MenuItem, Money, OrderConfirmation, PaymentMethod, SearchHit, View};

use crate::commands::cart::CartResponse;
use crate::commands::catalog::{MenuResponse, RestaurantSummary};
use crate::commands::checkout::CheckoutSummary;
use crate::commands::navigation::ViewResponse;
use crate::commands::{cart, catalog, checkout, config, navigation};
use crate::error::ApiError;
use crate::payment::MockPaymentGateway;
use crate::state::{CatalogState, ConfigState, SessionState};

/// Help text for the `help` command.
pub const HELP: &str = "\
Browse
  restaurants              list restaurants
  categories               list categories
  category <name>          restaurants serving a category
  search <query>           search restaurants and dishes
  open <restaurant-id>     open a restaurant
  menu                     show the open restaurant's menu
Cart
  add <item-id>            add one portion
  inc <item-id>            one more
  dec <item-id>            one less (never below 1)
  remove <item-id>         drop the line
  cart [--json]            show the cart
  toggle                   open/close the cart drawer
  clear                    empty the cart
Order
  checkout                 review the order
  back                     back to the restaurant
  pay [telebirr|awash|cbe] pay and place the order
  home                     back to the home view
Other
  config                   show configuration
  help                     this text
  quit                     leave";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Restaurants,
    Categories,
    Category(String),
    Search(String),
    Open(String),
    Menu,
    Add(String),
    Inc(String),
    Dec(String),
    Remove(String),
    Cart { json: bool },
    Toggle,
    Clear,
    Checkout,
    Back,
    Pay(PaymentMethod),
    Home,
    Config,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "restaurants" | "ls" => ShellCommand::Restaurants,
            "categories" => ShellCommand::Categories,
            "category" => ShellCommand::Category(argument(word, rest, "<name>")?),
            "search" => ShellCommand::Search(rest.to_string()),
            "open" => ShellCommand::Open(argument(word, rest, "<restaurant-id>")?),
            "menu" => ShellCommand::Menu,
            "add" => ShellCommand::Add(argument(word, rest, "<item-id>")?),
            "inc" => ShellCommand::Inc(argument(word, rest, "<item-id>")?),
            "dec" => ShellCommand::Dec(argument(word, rest, "<item-id>")?),
            "remove" | "rm" => ShellCommand::Remove(argument(word, rest, "<item-id>")?),
            "cart" => match rest {
                "" => ShellCommand::Cart { json: false },
                "--json" => ShellCommand::Cart { json: true },
                other => {
                    return Err(ApiError::validation(format!(
                        "Unexpected argument '{}'. Usage: cart [--json]",
                        other
                    )))
                }
            },
            "toggle" => ShellCommand::Toggle,
            "clear" => ShellCommand::Clear,
            "checkout" => ShellCommand::Checkout,
            "back" => ShellCommand::Back,
            "pay" if rest.is_empty() => ShellCommand::Pay(PaymentMethod::default()),
            "pay" => ShellCommand::Pay(PaymentMethod::from_id(rest).ok_or_else(|| {
                let known: Vec<_> = PaymentMethod::ALL.iter().map(|m| m.id()).collect();
                ApiError::validation(format!(
                    "Unknown payment method '{}' (expected one of: {})",
                    rest,
                    known.join(", ")
                ))
            })?),
            "home" => ShellCommand::Home,
            "config" => ShellCommand::Config,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => {
                return Err(ApiError::unknown_command(format!(
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    word
                )))
            }
        };

        Ok(command)
    }
}

fn argument(word: &str, rest: &str, usage: &str) -> Result<String, ApiError> {
    if rest.is_empty() {
        return Err(ApiError::validation(format!("Usage: {} {}", word, usage)));
    }
    Ok(rest.to_string())
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// One storefront session: the states every command draws from.
pub struct Shell {
    catalog: CatalogState,
    session: SessionState,
    config: ConfigState,
    gateway: MockPaymentGateway,
}

impl Shell {
    pub fn new(catalog: CatalogState, session: SessionState, config: ConfigState) -> Self {
        let gateway = MockPaymentGateway::new(config.payment_delay());
        Shell {
            catalog,
            session,
            config,
            gateway,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn banner(&self) -> String {
        format!(
            "Welcome to {}, {}! Type 'help' for commands.",
            self.config.store_name, self.config.customer_name
        )
    }

    /// Prompt showing the current view and the cart badge.
    pub fn prompt(&self) -> String {
        let (view, quantity) = self
            .session
            .with_store(|store| (store.view(), store.cart().total_quantity()));
        format!("[{} | cart {}] > ", view, quantity)
    }

    /// Runs one command and renders its result as text.
    pub async fn execute(&self, command: ShellCommand) -> Result<Reply, ApiError> {
        let text = match command {
            ShellCommand::Restaurants => {
                self.render_restaurants(&catalog::list_restaurants(&self.catalog))
            }
            ShellCommand::Categories => render_categories(&catalog::list_categories(&self.catalog)),
            ShellCommand::Category(name) => {
                let restaurants = catalog::restaurants_in_category(&self.catalog, &name)?;
                if restaurants.is_empty() {
                    format!("No restaurants serve '{}'.", name)
                } else {
                    self.render_restaurants(&restaurants)
                }
            }
            ShellCommand::Search(query) => {
                self.render_search(&catalog::search(&self.catalog, &query)?)
            }
            ShellCommand::Open(id) => {
                let view = navigation::open_restaurant(&self.catalog, &self.session, &id)?;
                let menu = catalog::get_menu(&self.session)?;
                format!("{}\n{}", render_view(&view), self.render_menu(&menu))
            }
            ShellCommand::Menu => self.render_menu(&catalog::get_menu(&self.session)?),
            ShellCommand::Add(id) => {
                let added = cart::add_to_cart(&self.catalog, &self.session, &id)?;
                format!("{} ({} in cart)", added.notice, added.cart.total_quantity)
            }
            ShellCommand::Inc(id) => {
                self.render_cart(&cart::update_cart_item(&self.session, &id, 1))
            }
            ShellCommand::Dec(id) => {
                self.render_cart(&cart::update_cart_item(&self.session, &id, -1))
            }
            ShellCommand::Remove(id) => {
                self.render_cart(&cart::remove_from_cart(&self.session, &id))
            }
            ShellCommand::Cart { json: true } => {
                serde_json::to_string_pretty(&cart::get_cart(&self.session))?
            }
            ShellCommand::Cart { json: false } => self.render_cart(&cart::get_cart(&self.session)),
            ShellCommand::Toggle => {
                let cart = cart::toggle_cart(&self.session);
                if cart.cart_open {
                    self.render_cart(&cart)
                } else {
                    "Cart closed.".to_string()
                }
            }
            ShellCommand::Clear => self.render_cart(&cart::clear_cart(&self.session)),
            ShellCommand::Checkout => {
                navigation::begin_checkout(&self.session)?;
                let summary = checkout::get_checkout_summary(&self.config, &self.session)?;
                self.render_checkout(&summary)
            }
            ShellCommand::Back => {
                let view = navigation::back_to_restaurant(&self.session)?;
                render_view(&view)
            }
            ShellCommand::Pay(method) => {
                let confirmation = checkout::pay(&self.gateway, &self.session, method).await?;
                self.render_confirmation(&confirmation)
            }
            ShellCommand::Home => render_view(&navigation::go_home(&self.session)?),
            ShellCommand::Config => {
                serde_json::to_string_pretty(&config::get_config(&self.config))?
            }
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(Reply::Quit),
        };

        Ok(Reply::Text(text))
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn money(&self, amount: Money) -> String {
        self.config.format_money(amount)
    }

    fn render_restaurants(&self, restaurants: &[RestaurantSummary]) -> String {
        let mut out = String::new();
        for r in restaurants {
            let _ = writeln!(
                out,
                "{:<6} {:<22} ★ {}  {:<10} delivery {}",
                r.id,
                r.name,
                r.rating,
                r.delivery_time,
                self.money(r.delivery_fee)
            );
        }
        out.trim_end().to_string()
    }

    fn render_search(&self, hits: &[SearchHit]) -> String {
        if hits.is_empty() {
            return "No matches.".to_string();
        }

        let mut out = String::new();
        for hit in hits {
            let _ = match hit {
                SearchHit::Restaurant {
                    restaurant_id,
                    name,
                } => writeln!(out, "restaurant {:<6} {}", restaurant_id, name),
                SearchHit::MenuItem {
                    restaurant_id,
                    item_id,
                    name,
                    price,
                } => writeln!(
                    out,
                    "dish       {:<6} {:<24} {}  (at {})",
                    item_id,
                    name,
                    self.money(*price),
                    restaurant_id
                ),
            };
        }
        out.trim_end().to_string()
    }

    fn render_menu(&self, menu: &MenuResponse) -> String {
        let mut out = format!(
            "{} (★ {}, {}, delivery {})\n",
            menu.restaurant.name,
            menu.restaurant.rating,
            menu.restaurant.delivery_time,
            self.money(menu.restaurant.delivery_fee)
        );
        for item in &menu.items {
            out.push_str(&self.render_dish(item));
        }
        out.trim_end().to_string()
    }

    fn render_dish(&self, item: &MenuItem) -> String {
        format!(
            "  {:<4} {:<24} {:>12}  [{}]\n       {}\n",
            item.id,
            item.name,
            self.money(item.price),
            item.category,
            item.description
        )
    }

    fn render_cart(&self, cart: &CartResponse) -> String {
        if cart.lines.is_empty() {
            return "Your cart is empty.".to_string();
        }

        let mut out = format!("CART ({} items)\n", cart.total_quantity);
        for line in &cart.lines {
            let _ = writeln!(
                out,
                "  {:<4} {:<24} x{:<3} {:>12}",
                line.id(),
                line.item.name,
                line.quantity,
                self.money(line.line_total())
            );
        }
        let _ = writeln!(out, "  Subtotal      {:>36}", self.money(cart.totals.subtotal));
        let _ = writeln!(out, "  Delivery fee  {:>36}", self.money(cart.totals.delivery_fee));
        let _ = write!(out, "  TOTAL         {:>36}", self.money(cart.totals.grand_total));
        out
    }

    fn render_checkout(&self, summary: &CheckoutSummary) -> String {
        let mut out = format!(
            "CHECKOUT{}\nDeliver to {} <{}>, {}\n\n",
            summary
                .restaurant
                .as_deref()
                .map(|name| format!(" from {}", name))
                .unwrap_or_default(),
            summary.customer_name,
            summary.customer_email,
            summary.delivery_address
        );
        out.push_str(&self.render_cart(&summary.cart));
        out.push_str("\n\nPay with: ");
        let methods: Vec<_> = summary
            .methods
            .iter()
            .map(|m| format!("{} ({})", m.id(), m))
            .collect();
        out.push_str(&methods.join(", "));
        out
    }

    fn render_confirmation(&self, order: &OrderConfirmation) -> String {
        format!(
            "Order placed! {} dishes paid with {}: {}\nOrder id {} at {}\nType 'home' to start a new order.",
            order.total_quantity(),
            order.method,
            self.money(order.amount),
            order.order_id,
            order.placed_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

fn render_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{} {}", c.icon, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_view(view: &ViewResponse) -> String {
    match (view.view, view.active_restaurant.as_deref()) {
        (View::Restaurant, Some(name)) => format!("Now viewing {}.", name),
        (View::Home, _) => "Home.".to_string(),
        (other, _) => format!("On the {} view.", other),
    }
}
