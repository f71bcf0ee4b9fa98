use patrika_entity::order::{
    Model as OrderModel, OrderItem as OrderItemModel, Status as StatusModel,
    StudentProfile as StudentProfileModel,
};

use crate::convert::{FromDbModel, IntoDbModel, IntoModel};
use crate::order::{Order, OrderItem, Status, StudentProfile};

impl FromDbModel<StatusModel> for Status {
    fn from_db_model(model: StatusModel) -> Self {
        match model {
            StatusModel::Pending => Self::Pending,
            StatusModel::Confirmed => Self::Confirmed,
            StatusModel::Processing => Self::Processing,
            StatusModel::Shipped => Self::Shipped,
            StatusModel::Delivered => Self::Delivered,
            StatusModel::Cancelled => Self::Cancelled,
        }
    }
}

impl IntoDbModel<StatusModel> for Status {
    fn into_db_model(self) -> StatusModel {
        match self {
            Self::Pending => StatusModel::Pending,
            Self::Confirmed => StatusModel::Confirmed,
            Self::Processing => StatusModel::Processing,
            Self::Shipped => StatusModel::Shipped,
            Self::Delivered => StatusModel::Delivered,
            Self::Cancelled => StatusModel::Cancelled,
        }
    }
}

impl FromDbModel<OrderItemModel> for OrderItem {
    fn from_db_model(model: OrderItemModel) -> Self {
        Self {
            product_id: model.product_id,
            product_name: model.product_name,
            size: model.size,
            quantity: model.quantity,
            price: model.price,
        }
    }
}

impl IntoDbModel<OrderItemModel> for OrderItem {
    fn into_db_model(self) -> OrderItemModel {
        OrderItemModel {
            product_id: self.product_id,
            product_name: self.product_name,
            size: self.size,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

impl FromDbModel<StudentProfileModel> for StudentProfile {
    fn from_db_model(model: StudentProfileModel) -> Self {
        Self {
            class: model.class,
            section: model.section,
            department: model.department,
            version: model.version,
        }
    }
}

impl IntoDbModel<StudentProfileModel> for StudentProfile {
    fn into_db_model(self) -> StudentProfileModel {
        StudentProfileModel {
            class: self.class,
            section: self.section,
            department: self.department,
            version: self.version,
        }
    }
}

impl FromDbModel<OrderModel> for Order {
    fn from_db_model(model: OrderModel) -> Self {
        let order_number = model.id.simple().to_string()[..8].to_uppercase();
        Self {
            id: model.id,
            order_number,
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            customer_phone: model.customer_phone,
            delivery_address: model.delivery_address,
            notes: model.notes,
            items: model.items.0.into_iter().map(FromDbModel::from_db_model).collect(),
            total_amount: model.total_amount,
            user_id: model.user_id,
            student_profile: model.student_profile.map(FromDbModel::from_db_model),
            status: model.status.into_model(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
