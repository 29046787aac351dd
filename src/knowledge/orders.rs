//! Order number recognition against the demo order table.

/// One tracked order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    /// Identifier as written in the table, e.g. `#12345`.
    pub id: &'static str,
    pub status: &'static str,
    pub items: &'static str,
    pub eta: &'static str,
    pub location: &'static str,
}

impl OrderRecord {
    /// Multi-line tracking summary shown to the customer.
    pub fn summary(&self) -> String {
        format!(
            "📦 **Order Found!** Order {}\n\n\
             **Status:** {} ✅\n\
             **Items:** {}\n\
             **Expected Delivery:** {}\n\
             **Current Location:** {}\n\n\
             Need anything else? I can help with returns, cancellations, or any other questions!",
            self.id, self.status, self.items, self.eta, self.location
        )
    }
}

/// Read-only order table. Iteration order decides ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTable {
    records: Vec<OrderRecord>,
}

impl OrderTable {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// First record, in table order, whose identifier occurs in `text`
    /// (compared uppercase).
    pub fn find(&self, text: &str) -> Option<&OrderRecord> {
        let upper = text.to_uppercase();
        self.records.iter().find(|r| upper.contains(r.id))
    }
}

impl Default for OrderTable {
    fn default() -> Self {
        demo_orders()
    }
}

/// Tracking summary for the first order mentioned in `text`, if any.
pub fn lookup(text: &str, table: &OrderTable) -> Option<String> {
    table.find(text).map(OrderRecord::summary)
}

pub fn demo_orders() -> OrderTable {
    OrderTable::new(vec![
        OrderRecord {
            id: "#12345",
            status: "Out for Delivery",
            items: "Wireless Headphones",
            eta: "Today by 6 PM",
            location: "Mombasa Distribution Center",
        },
        OrderRecord {
            id: "#67890",
            status: "Shipped",
            items: "Running Shoes",
            eta: "Tomorrow",
            location: "Nairobi Hub",
        },
        OrderRecord {
            id: "#11111",
            status: "Processing",
            items: "Laptop Stand",
            eta: "3-5 business days",
            location: "Warehouse",
        },
        OrderRecord {
            id: "#99999",
            status: "Delivered",
            items: "Phone Case",
            eta: "Delivered on Nov 15",
            location: "Your doorstep",
        },
    ])
}
