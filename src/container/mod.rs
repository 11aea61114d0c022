pub mod prioritydeque;
