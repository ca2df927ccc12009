//! # Kitchen Storefront
//!
//! > **Ordering for a single restaurant kitchen: menu, cart, checkout.**
//!
//! Customers browse a categorized menu, fill a cart (with half/full portions
//! for some dishes) and check out in three steps: delivery details, a manual
//! UPI payment confirmed by its transaction reference, and success. The only
//! persistence is a table store holding `menu_items`, `orders` and
//! `order_items`.
//!
//! ## 🚀 Core Concepts
//!
//! ### Owned session state
//! The [`Cart`](cart::Cart) and the [`CheckoutFlow`](checkout::CheckoutFlow)
//! are plain values mutated through `&mut` by whoever owns them. No globals,
//! no locks.
//!
//! ### One store contract, two backends
//! [`TableStore`](store::TableStore) is what the storefront reads and writes.
//! [`RestStore`](store::RestStore) talks to a PostgREST-style HTTP API;
//! [`ActorStore`](store::ActorStore) keeps the tables in-process, one
//! [`ResourceActor`](framework::ResourceActor) per table.
//!
//! ### Mocking
//! The in-memory store is built on actor clients, so tests swap any table for
//! a [`MockClient`](framework::mock::MockClient) and script its answers.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic `ResourceActor<T>` / `ResourceClient<T>` over any
//! [`ActorEntity`](framework::ActorEntity).
//!
//! ### 2. The Tables ([`model`], [`menu_actor`], [`order_actor`], [`clients`])
//! Row types, their entity hooks and the typed clients in front of them.
//!
//! ### 3. The Store ([`store`])
//! The table-store contract and its two implementations.
//!
//! ### 4. The Storefront ([`catalog`], [`cart`], [`pricing`], [`checkout`], [`payment`], [`session`])
//! Menu grouping, cart state, the delivery surcharge, the checkout state
//! machine with its two order writes, and UPI links.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! Starts and stops the in-memory actors, installs tracing, reads
//! `STOREFRONT_*` settings.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # In-memory store with a sample menu
//! RUST_LOG=info cargo run
//!
//! # Against a remote store
//! STOREFRONT_STORE_URL=https://<project>.supabase.co STOREFRONT_STORE_KEY=<anon key> cargo run
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod money;
pub mod order_actor;
pub mod payment;
pub mod pricing;
pub mod session;
pub mod store;
