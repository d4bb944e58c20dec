//! Order confirmation messages.
//!
//! After an order is committed the customer is sent a confirmation. Delivery is best
//! effort: the notifier runs on the blocking thread pool after the response has been
//! decided, and a failure is only logged.

use crate::models::Order;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Sends order confirmations to customers.
pub trait Notifier: Send + Sync {
    /// Sends the confirmation for `order` to `email_address`.
    ///
    /// # Errors
    /// Returns an I/O error when the message could not be handed to the transport.
    fn send_order_confirmation(&self, email_address: &str, order: &Order) -> std::io::Result<()>;
}

/// Subject and body of a confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationMessage {
    pub subject: String,
    pub body: String,
}

/// Renders the confirmation sent for `order`.
#[must_use]
pub fn confirmation_message(order: &Order) -> ConfirmationMessage {
    let subject = format!("Your pizza order #{} is confirmed", order.id);

    let fulfilment = if order.is_delivery {
        format!("Delivery to: {}", order.cust_address)
    } else {
        "Pickup in store".to_string()
    };

    let mut body = format!(
        "Thanks for your order!\n\nOrder #{} placed {}\n{fulfilment}\n\n",
        order.id,
        order.order_time.format("%Y-%m-%d %H:%M")
    );
    for pizza in &order.pizzas {
        let toppings: Vec<&str> = pizza.ingredient_names().collect();
        let toppings = if toppings.is_empty() {
            "no toppings".to_string()
        } else {
            toppings.join(", ")
        };
        body.push_str(&format!(
            "- {} {} pizza ({toppings}): ${:.2}\n",
            pizza.pizza_size, pizza.dough, pizza.pizza_price
        ));
    }
    body.push_str(&format!("\nTotal: ${:.2}", order.total_price()));

    ConfirmationMessage { subject, body }
}

/// Logs confirmations instead of sending them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send_order_confirmation(&self, email_address: &str, order: &Order) -> std::io::Result<()> {
        let message = confirmation_message(order);
        info!(
            order_id = order.id,
            to = email_address,
            subject = %message.subject,
            "Order confirmation:\n{}",
            message.body
        );
        Ok(())
    }
}

/// Writes each confirmation to `order-<id>.txt` in a directory picked up by a mail relay.
#[derive(Debug, Clone)]
pub struct OutboxNotifier {
    dir: PathBuf,
}

impl OutboxNotifier {
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl Notifier for OutboxNotifier {
    fn send_order_confirmation(&self, email_address: &str, order: &Order) -> std::io::Result<()> {
        let message = confirmation_message(order);
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("order-{}.txt", order.id));
        std::fs::write(
            &path,
            format!(
                "To: {email_address}\nSubject: {}\n\n{}\n",
                message.subject, message.body
            ),
        )?;
        info!(order_id = order.id, path = %path.display(), "Order confirmation written to outbox");
        Ok(())
    }
}

/// Sends the confirmation for `order` in the background.
///
/// Failures are logged and otherwise ignored.
pub fn dispatch_order_confirmation(notifier: Arc<dyn Notifier>, order: Order) {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = notifier.send_order_confirmation(&order.cust_email, &order) {
            warn!(
                order_id = order.id,
                to = %order.cust_email,
                "Failed to send order confirmation: {e}"
            );
        }
    });
}
